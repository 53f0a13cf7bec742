//! Interactive product form prompts.

use anyhow::Result;
use catalog_app::ProductForm;
use catalog_core::{FormField, FormInput, ValidatedForm};
use dialoguer::{Input, Select};

use crate::output::Output;

/// Run a blocking terminal prompt off the async runtime.
pub async fn ask<T, F>(prompt: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, dialoguer::Error> + Send + 'static,
{
    Ok(tokio::task::spawn_blocking(prompt).await??)
}

/// Prompt for the given fields, starting from the current values.
pub async fn prompt_fields(
    form: &ProductForm,
    mut input: FormInput,
    fields: &[FormField],
) -> Result<FormInput> {
    for &field in fields {
        let current = input.get(field).to_string();
        let value = if field == FormField::Category && !form.categories().is_empty() {
            select_category(form, &current).await?
        } else {
            let prompt = field_prompt(field);
            let allow_empty = !field.is_required();
            ask(move || {
                Input::<String>::new()
                    .with_prompt(prompt)
                    .with_initial_text(current)
                    .allow_empty(allow_empty)
                    .interact_text()
            })
            .await?
        };
        input.set(field, value);
    }
    Ok(input)
}

/// Validate the input, re-prompting failing fields when interactive.
pub async fn validate(
    form: &ProductForm,
    mut input: FormInput,
    interactive: bool,
    output: &Output,
) -> Result<ValidatedForm> {
    loop {
        let errors = match form.submit(&input) {
            Ok(data) => return Ok(data),
            Err(errors) => errors,
        };
        if !interactive {
            return Err(errors.into());
        }

        for (field, message) in errors.iter() {
            output.warn(&format!("{}: {}", field.label(), message));
        }
        let failing: Vec<FormField> = errors.iter().map(|(field, _)| field).collect();
        input = prompt_fields(form, input, &failing).await?;
    }
}

async fn select_category(form: &ProductForm, current: &str) -> Result<String> {
    let categories = form.categories();
    let labels: Vec<String> = categories.iter().map(|c| c.label()).collect();
    let default = categories
        .iter()
        .position(|c| c.slug == current)
        .unwrap_or(0);

    let choice = ask(move || {
        Select::new()
            .with_prompt(field_prompt(FormField::Category))
            .items(&labels)
            .default(default)
            .interact()
    })
    .await?;

    Ok(categories[choice].slug.clone())
}

fn field_prompt(field: FormField) -> String {
    if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}
