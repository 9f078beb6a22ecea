use crate::cli::EvalArgs;
use crate::config;
use crate::error::Result;
use nalgebra::Point3;
use psgeom::engine::context::EvaluationContext;
use tracing::info;

pub fn run(args: EvalArgs) -> Result<()> {
    let sweep_config = config::build_eval_config(&args)?;
    let context = EvaluationContext::from_config(&sweep_config);
    let [x, y, z] = args.point;
    let point = Point3::new(x, y, z);

    info!("Evaluating {} term(s) at ({}, {}, {}).", context.terms().len(), x, y, z);
    for line in report(&context, &point) {
        println!("{}", line);
    }
    Ok(())
}

/// One line per term contribution, then the summed value.
fn report(context: &EvaluationContext, point: &Point3<f64>) -> Vec<String> {
    let mut lines: Vec<String> = context
        .contributions(point)
        .iter()
        .enumerate()
        .map(|(i, part)| format!("  #{:<3} {:<16} {:.6e}", i + 1, part.name, part.value))
        .collect();
    lines.push(format!(
        "f({}, {}, {}; t = {}) = {:.6e}",
        point.x,
        point.y,
        point.z,
        context.time(),
        context.evaluate(point)
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::fs;

    const TWO_TERMS: &str = r#"
[grid]
nx = 64
ny = 64
nz = 1

[sweep]
time = 400.0

[[term]]
shape = "stripeRegionsX"
leftedge = 10.0
rightedge = 20.0

[[term]]
shape = "zoneAnnealX"
zoneSize = 10.0
widthParam = 2.0
chiNmax = 14.0
chiNmin = 2.0
initialXpos = 20.0
zoneRate = 200.0
"#;

    fn eval_args(config: std::path::PathBuf, point: [f64; 3]) -> EvalArgs {
        EvalArgs {
            config,
            point,
            time: None,
            set_values: vec![],
        }
    }

    #[test]
    fn report_lists_each_term_and_their_sum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eval.toml");
        fs::write(&path, TWO_TERMS).unwrap();

        let config = config::build_eval_config(&eval_args(path, [22.0, 5.0, 0.0])).unwrap();
        let context = EvaluationContext::from_config(&config);
        let point = Point3::new(15.0, 5.0, 0.0);
        let lines = report(&context, &point);

        let parts = context.contributions(&point);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].value, 1.0);
        let total = parts[0].value + parts[1].value;
        assert_eq!(context.evaluate(&point), total);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  #1   stripeRegionsX"));
        assert!(lines[0].ends_with("1.000000e0"));
        assert!(lines[1].contains("zoneAnnealX"));
        assert_eq!(lines[2], format!("f(15, 5, 0; t = 400) = {:.6e}", total));
    }

    #[test]
    fn eval_runs_against_a_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eval.toml");
        fs::write(&path, TWO_TERMS).unwrap();
        run(eval_args(path, [1.0, 2.0, 0.0])).unwrap();
    }

    #[test]
    fn eval_reports_a_bad_term_by_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("eval.toml");
        fs::write(
            &path,
            "[grid]\nnx = 4\nny = 4\nnz = 1\n[[term]]\nshape = \"tricorne\"\nradius = -1.0\nbogus = 2.0\n",
        )
        .unwrap();
        let err = run(eval_args(path, [0.0, 0.0, 0.0])).unwrap_err();
        assert!(matches!(err, CliError::Term { index: 1, .. }));
    }
}
