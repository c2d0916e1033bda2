pub type CmdResult<T> = handlergen::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod config;
pub mod make;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (handlergen::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Make(args) => dispatch!(args, global, make),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
