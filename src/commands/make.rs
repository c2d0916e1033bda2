use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use handlergen::defaults;
use handlergen::local_files::LocalFs;
use handlergen::{GenerateOptions, GenerateOutput, Generator, ResolveRequest};

use super::CmdResult;

#[derive(Args, Debug)]
pub struct MakeArgs {
    /// The name of the handler (or the entity when actions are given)
    pub name: String,

    /// Generate handlers for all resource actions
    #[arg(long, short = 'r')]
    pub resource: bool,

    /// Exclude the create and edit actions
    #[arg(long, short = 'a')]
    pub api: bool,

    /// The namespace for generated handler(s); a leading separator makes it absolute
    #[arg(long, value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Generate handlers for all specified actions separated by comma
    #[arg(long, value_name = "LIST")]
    pub actions: Option<String>,

    /// Exclude specified actions separated by comma
    #[arg(long, value_name = "LIST")]
    pub except: Option<String>,

    /// Overwrite existing handlers
    #[arg(long, short = 'f')]
    pub force: bool,

    /// Preview what would be generated without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Project root the app path is resolved against (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeOutput {
    pub command: &'static str,
    pub actions: Vec<String>,
    #[serde(flatten)]
    pub result: GenerateOutput,
}

pub fn run(args: MakeArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<MakeOutput> {
    let defaults = defaults::load_defaults();

    let resolution = handlergen::resolve(&ResolveRequest {
        name: args.name,
        resource: args.resource,
        actions: args.actions.unwrap_or_default(),
        except: args.except.unwrap_or_default(),
        api: args.api,
        namespace: args.namespace.unwrap_or_default(),
        root_namespace: defaults.root_namespace.clone(),
    })?;

    let project_root = match args.path {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| {
            handlergen::Error::internal_io(
                e.to_string(),
                Some("resolve current directory".to_string()),
            )
        })?,
    };

    let fs = LocalFs::new();
    let generator = Generator::new(&fs, project_root, &defaults);
    let result = generator.generate(
        &resolution,
        GenerateOptions {
            force: args.force,
            dry_run: args.dry_run,
        },
    )?;

    Ok((
        MakeOutput {
            command: "make",
            actions: resolution.actions,
            result,
        },
        0,
    ))
}
