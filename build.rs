// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: skip prompts
fn yes_arg(help: &'static str) -> Arg {
    Arg::new("yes")
        .short('y')
        .long("yes")
        .action(ArgAction::SetTrue)
        .help(help)
}

fn build_cli() -> Command {
    Command::new("bearnie")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Bearnie Contributors")
        .about("Add beautiful Astro components to your project")
        .arg(
            Arg::new("cwd")
                .long("cwd")
                .global(true)
                .default_value(".")
                .help("Project root directory"),
        )
        .arg(
            Arg::new("registry_url")
                .long("registry-url")
                .global(true)
                .env("BEARNIE_REGISTRY_URL")
                .help("Base URL of the component registry"),
        )
        .arg(
            Arg::new("registry_path")
                .long("registry-path")
                .global(true)
                .env("BEARNIE_REGISTRY_PATH")
                .help("Read the registry from a local directory instead of HTTP"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("init")
                .about("Set up bearnie in an Astro project")
                .arg(yes_arg("Skip prompts and use defaults"))
                .arg(Arg::new("components_dir").long("components-dir").help("Where component files go"))
                .arg(Arg::new("utils_dir").long("utils-dir").help("Where utility files go")),
        )
        .subcommand(
            Command::new("add")
                .about("Add components to your project")
                .arg(
                    Arg::new("components")
                        .num_args(0..)
                        .help("Component names (prompts when omitted)"),
                )
                .arg(yes_arg("Skip prompts and overwrite existing files"))
                .arg(
                    Arg::new("all")
                        .short('a')
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .help("Add every available component"),
                ),
        )
        .subcommand(
            Command::new("list").about("List available components").arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue)
                    .help("Print the registry index as JSON"),
            ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").required(true).help("Shell to generate completions for")),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("bearnie.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
