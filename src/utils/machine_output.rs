use crate::error::Result;
use serde::Serialize;

/// Versioned wrapper printed by every `--json` command.
#[derive(Debug, Serialize)]
pub struct MachineEnvelope<T>
where
    T: Serialize,
{
    pub version: String,
    pub command: String,
    pub ok: bool,
    pub data: T,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl<T: Serialize> MachineEnvelope<T> {
    pub fn new(command: &str, data: T, warnings: Vec<String>, errors: Vec<String>) -> Self {
        Self {
            version: "v1".to_string(),
            command: command.to_string(),
            ok: errors.is_empty(),
            data,
            warnings,
            errors,
        }
    }
}

pub fn emit_v1<T>(command: &str, data: T, warnings: Vec<String>, errors: Vec<String>) -> Result<()>
where
    T: Serialize,
{
    let envelope = MachineEnvelope::new(command, data, warnings, errors);
    let out = serde_json::to_string_pretty(&envelope)?;
    println!("{}", out);
    Ok(())
}

/// One compact JSON object per line, for streamed output such as progress events.
pub fn emit_line<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
