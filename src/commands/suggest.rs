use crate::core::{
    command_init::CommandContext,
    error::Result,
    suggest::{split_partial, suggest},
};

pub fn execute_suggest(context: &CommandContext, partial: Option<String>, json: bool) -> Result<()> {
    let partial = partial.unwrap_or_default();
    let entries = suggest(&context.root(), &partial)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let (dir_part, _) = split_partial(&partial);
    for entry in &entries {
        println!("{}", entry.completion(dir_part));
    }
    Ok(())
}
