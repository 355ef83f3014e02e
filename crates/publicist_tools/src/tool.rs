//! Tool trait for agent-callable functions.

use serde_json::Value;

/// A function an agent can call with JSON arguments.
///
/// Tools never fail from the caller's point of view: problems with the
/// input are reported inside the returned document, under an `error` key.
pub trait Tool: Send + Sync {
    /// Name agents use to call the tool.
    fn name(&self) -> &str;

    /// What the tool does, written for the model.
    fn description(&self) -> &str;

    /// JSON schema of the accepted arguments.
    fn input_schema(&self) -> Value;

    /// Run the tool.
    fn execute(&self, input: Value) -> Value;
}
