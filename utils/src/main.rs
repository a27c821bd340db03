use std::fs;
use std::io::{self, Read};
use std::process::exit;

use ast_error_detection_utils::{EditMarker, PathTree};
use clap::Parser;
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(version, about = "Print an edit script as a tree of structural paths")]
struct Args {
    /// Edit script JSON file, or stdin when omitted
    input: Option<String>,
    /// Name of the root segment
    #[arg(short, long, default_value = "Module")]
    root: String,
}

fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) if path != "-" => fs::read_to_string(path),
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn edit_label(edit: &Value) -> String {
    let current = edit.get("current").and_then(Value::as_str);
    let new = edit.get("new").and_then(Value::as_str);
    match (current, new) {
        (Some(current), Some(new)) => format!("{} -> {}", current, new),
        (Some(label), None) | (None, Some(label)) => label.to_string(),
        (None, None) => String::new(),
    }
}

fn main() {
    let args = Args::parse();

    let input = match read_input(args.input.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Failed to read edit script: {}", e);
            exit(2);
        }
    };

    let edits: Vec<Value> = match serde_json::from_str(&input) {
        Ok(edits) => edits,
        Err(e) => {
            eprintln!("Edit script is not a JSON array: {}", e);
            exit(2);
        }
    };

    let mut tree = PathTree::new(&args.root);
    for edit in &edits {
        let Some(marker) = edit
            .get("type")
            .and_then(Value::as_str)
            .and_then(EditMarker::from_kind)
        else {
            continue;
        };
        let path: Vec<&str> = edit
            .get("path")
            .and_then(Value::as_array)
            .map(|p| p.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        tree.add_edit(&path, marker, &edit_label(edit));
    }

    if tree.is_empty() {
        return;
    }

    match tree.print() {
        Ok(printed) => print!("{}", printed),
        Err(e) => {
            eprintln!("Failed to render tree: {}", e);
            exit(2);
        }
    }
}
