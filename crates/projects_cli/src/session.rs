//! Interactive prompt loop: pick an action, fill its form, see the outcome.

use projects_core::{Action, ActionRequest, Controller, Outcome, ProjectApi};
use std::io::{self, BufRead, Write};

/// Runs prompts until `quit`, `exit`, or end of input.
pub async fn run_session<A, R, W>(
    controller: &Controller<A>,
    mut input: R,
    output: &mut W,
) -> io::Result<()>
where
    A: ProjectApi,
    R: BufRead,
    W: Write,
{
    let labels: Vec<&str> = Action::ALL.iter().map(|action| action.label()).collect();
    writeln!(output, "Select action: {} (quit to exit)", labels.join(" | "))?;
    loop {
        let Some(line) = prompt(&mut input, output, "action> ")? else {
            break;
        };
        let keyword = line.trim();
        if keyword.is_empty() {
            continue;
        }
        if matches!(keyword, "quit" | "exit") {
            break;
        }

        let action = match keyword.parse::<Action>() {
            Ok(action) => action,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        };

        match fill_form(controller, action, &mut input, output).await? {
            Form::Submit(request) => {
                let outcome = controller.run(request).await;
                write_outcome(output, &outcome)?;
            }
            Form::Abandoned => {}
            Form::EndOfInput => break,
        }
    }
    Ok(())
}

/// Result of prompting one form.
enum Form {
    Submit(ActionRequest),
    /// Form could not be filled; its reason was already printed.
    Abandoned,
    EndOfInput,
}

/// Answer that clears a prefilled update field.
const CLEAR_FIELD: &str = "-";

async fn fill_form<A, R, W>(
    controller: &Controller<A>,
    action: Action,
    input: &mut R,
    output: &mut W,
) -> io::Result<Form>
where
    A: ProjectApi,
    R: BufRead,
    W: Write,
{
    let request = match action {
        Action::Create => {
            let Some(name) = prompt(input, output, "Project name: ")? else {
                return Ok(Form::EndOfInput);
            };
            let Some(description) = prompt(input, output, "Description: ")? else {
                return Ok(Form::EndOfInput);
            };
            ActionRequest::Create { name, description }
        }
        Action::Read => ActionRequest::Read,
        Action::Update => return fill_update_form(controller, input, output).await,
        Action::Delete => {
            let Some(id) = prompt(input, output, "Project id to delete: ")? else {
                return Ok(Form::EndOfInput);
            };
            ActionRequest::Delete { id }
        }
        Action::ReadById => {
            let Some(id) = prompt(input, output, "Project id: ")? else {
                return Ok(Form::EndOfInput);
            };
            ActionRequest::ReadById { id }
        }
    };
    Ok(Form::Submit(request))
}

// Blank answers keep the prefilled value, like an untouched form field;
// `-` clears it.
async fn fill_update_form<A, R, W>(
    controller: &Controller<A>,
    input: &mut R,
    output: &mut W,
) -> io::Result<Form>
where
    A: ProjectApi,
    R: BufRead,
    W: Write,
{
    let form = controller.run(ActionRequest::UpdateForm { id: None }).await;
    write_outcome(output, &form)?;
    let default_id = match form {
        Outcome::UpdateForm(state) if !state.choices.is_empty() => {
            state.selected.map(|project| project.id)
        }
        _ => return Ok(Form::Abandoned),
    };

    let label = match &default_id {
        Some(id) => format!("Project id [{id}]: "),
        None => "Project id: ".to_string(),
    };
    let Some(answer) = prompt(input, output, &label)? else {
        return Ok(Form::EndOfInput);
    };
    let id = match (answer.trim(), default_id) {
        ("", Some(default_id)) => default_id,
        (answer, _) => answer.to_string(),
    };

    let selected = controller
        .run(ActionRequest::UpdateForm {
            id: Some(id.clone()),
        })
        .await;
    let current = match selected {
        Outcome::UpdateForm(state) => state.selected,
        failure => {
            write_outcome(output, &failure)?;
            return Ok(Form::Abandoned);
        }
    };
    let Some(current) = current else {
        return Ok(Form::Abandoned);
    };

    let Some(name) = prompt(input, output, &format!("Name [{}]: ", current.name))? else {
        return Ok(Form::EndOfInput);
    };
    let Some(description) =
        prompt(input, output, &format!("Description [{}]: ", current.description))?
    else {
        return Ok(Form::EndOfInput);
    };

    Ok(Form::Submit(ActionRequest::Update {
        id,
        name: edited_field(name, current.name),
        description: edited_field(description, current.description),
    }))
}

fn edited_field(answer: String, current: String) -> String {
    match answer.trim() {
        "" => current,
        CLEAR_FIELD => String::new(),
        _ => answer,
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn write_outcome<W: Write>(output: &mut W, outcome: &Outcome) -> io::Result<()> {
    if outcome.is_error() {
        writeln!(output, "error: {}", outcome.render())
    } else {
        writeln!(output, "{}", outcome.render())
    }
}
