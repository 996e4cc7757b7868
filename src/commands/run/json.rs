use dijtrace_core::error::Result;
use dijtrace_core::graph::RunResult;

use crate::cli::GraphArgs;

/// Output in JSON format. The full step trace is always included; replay
/// consumers read it from here.
pub fn output_run_json(args: &GraphArgs, result: &RunResult) -> Result<()> {
    let mut json = serde_json::to_value(result)?;
    if let Some(obj) = json.as_object_mut() {
        obj.insert("source".to_string(), serde_json::json!(args.source));
        obj.insert("nodes".to_string(), serde_json::json!(args.nodes));
        obj.insert("directed".to_string(), serde_json::json!(args.directed));
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
