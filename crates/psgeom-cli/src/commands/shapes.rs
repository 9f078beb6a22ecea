use crate::cli::ShapesArgs;
use crate::error::Result;
use psgeom::core::shapes::{ShapeError, ShapeKind};
use psgeom::engine::error::EngineError;

pub fn run(args: ShapesArgs) -> Result<()> {
    match args.name {
        None => print!("{}", list()),
        Some(name) => print!("{}", describe(&name)?),
    }
    Ok(())
}

fn list() -> String {
    let mut out = String::new();
    for kind in ShapeKind::all() {
        out.push_str(&format!("{:<16} {}\n", kind.name(), kind.description()));
    }
    out
}

fn describe(name: &str) -> Result<String> {
    let kind = ShapeKind::from_name(name)
        .ok_or_else(|| EngineError::from(ShapeError::UnknownShape(name.to_string())))?;
    let defaults = kind.default_params();

    let mut out = format!("{}: {}\n", kind.name(), kind.description());
    if kind.name() != name {
        out.push_str(&format!("  (alias '{}')\n", name));
    }
    out.push_str("Parameters:\n");
    for param in kind.required_parameters() {
        let default = defaults.get(*param).copied().unwrap_or_default();
        out.push_str(&format!("  {:<14} default {}\n", param, default));
    }
    for param in kind.optional_parameters() {
        out.push_str(&format!("  {:<14} optional\n", param));
    }
    Ok(out)
}
