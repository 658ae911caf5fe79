use anyhow::{bail, Context, Result};
use serde::Serialize;

use statics_core::calculations::{solve, AnalysisInput, Geometry, Solution};
use statics_core::cross_section::CrossSection;
use statics_core::loads::{Load, Section};
use statics_core::materials::MaterialCatalog;
use statics_core::units::ForceUnit;
use statics_core::{load_project, save_project, Project};

use crate::cli::{Command, DemoArgs, DemoKind, NewArgs, SolveArgs};
use crate::display;

pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Solve(args) => run_solve(args),
        Command::Demo(args) => run_demo(args),
        Command::Materials => run_materials(),
        Command::New(args) => run_new(args),
    }
}

#[derive(Serialize)]
struct SolvedAnalysis<'a> {
    id: String,
    label: &'a str,
    solution: Solution,
}

fn run_solve(args: SolveArgs) -> Result<()> {
    let project = load_project(&args.file)
        .with_context(|| format!("Failed to load project {}", args.file.display()))?;

    let selected: Vec<_> = project
        .analyses_by_label()
        .into_iter()
        .filter(|(id, input)| match &args.analysis {
            Some(wanted) => id.to_string() == *wanted || input.label == *wanted,
            None => true,
        })
        .collect();

    if selected.is_empty() {
        match &args.analysis {
            Some(wanted) => bail!("No analysis matches '{}'", wanted),
            None => bail!("Project {} contains no analyses", args.file.display()),
        }
    }

    let mut solved = Vec::with_capacity(selected.len());
    for (id, input) in selected {
        let solution = project
            .solve(id)
            .with_context(|| format!("Failed to solve analysis {}", id))?;
        solved.push(SolvedAnalysis {
            id: id.to_string(),
            label: &input.label,
            solution,
        });
    }

    if args.output.json {
        let json = serde_json::to_string_pretty(&solved).context("Failed to encode results")?;
        println!("{}", json);
    } else {
        for entry in &solved {
            display::print_solution(entry.label, &entry.solution);
        }
    }
    Ok(())
}

fn run_demo(args: DemoArgs) -> Result<()> {
    let input = match args.kind {
        DemoKind::Beam => demo_beam(),
        DemoKind::Frame => demo_frame(),
    };
    let solution = solve(&input);

    if args.output.json {
        let json = serde_json::to_string_pretty(&solution).context("Failed to encode results")?;
        println!("{}", json);
    } else {
        display::print_solution(&input.label, &solution);
    }
    Ok(())
}

fn run_materials() -> Result<()> {
    display::print_materials(MaterialCatalog::standard());
    Ok(())
}

fn run_new(args: NewArgs) -> Result<()> {
    if args.file.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.file.display()
        );
    }

    let mut project = Project::new(args.engineer, args.job_id, args.client);
    project.add_analysis(demo_beam());
    project.add_analysis(demo_frame());

    save_project(&project, &args.file)
        .with_context(|| format!("Failed to write {}", args.file.display()))?;
    println!(
        "Wrote {} with {} analyses",
        args.file.display(),
        project.analysis_count()
    );
    Ok(())
}

/// 2.4 m I-beam on supports at 0 and 2 m, loaded into the overhang.
fn demo_beam() -> AnalysisInput {
    let mut input = AnalysisInput::simple_beam("Demo beam", Geometry::beam(2400.0, 0.0, 2000.0));
    input.cross_section = CrossSection::IBeam {
        height: 200.0,
        flange_width: 100.0,
        flange_thickness: 10.0,
        web_thickness: 6.0,
    };
    input.loads = vec![
        Load::point(150.0, ForceUnit::Kilograms, 800.0).with_name("Motor"),
        Load::uniform(500.0, ForceUnit::Newtons, 200.0, 1800.0).with_name("Cable tray"),
        Load::point(50.0, ForceUnit::Pounds, 2400.0).with_name("Hoist hook"),
    ];
    input
}

/// 2.4 × 1.2 m channel frame carrying two equipment sections.
fn demo_frame() -> AnalysisInput {
    let mut input = AnalysisInput::base_frame("Demo frame", Geometry::frame(2400.0, 1200.0));
    input.cross_section = CrossSection::CChannel {
        height: 100.0,
        flange_width: 50.0,
        flange_thickness: 8.5,
        web_thickness: 6.0,
    };

    let pump = Section::new(0.0, 1200.0)
        .with_casing_weight(80.0, ForceUnit::Kilograms)
        .with_primary_load(250.0, ForceUnit::Kilograms)
        .with_name("Pump");
    let tank = Section::new(1200.0, 2400.0)
        .with_casing_weight(60.0, ForceUnit::Kilograms)
        .with_primary_load(400.0, ForceUnit::Kilograms)
        .with_name("Tank");

    input.loads = vec![
        Load::distributed_patch(200.0, ForceUnit::Kilograms, 600.0, 800.0, 600.0)
            .at_lateral(300.0)
            .with_name("Walkway")
            .in_section(pump.id),
        Load::point(40.0, ForceUnit::Kilograms, 1800.0)
            .with_name("Valve")
            .in_section(tank.id),
    ];
    input.sections = vec![pump, tank];
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use statics_core::SolveWarning;

    #[test]
    fn demo_frame_solves_cleanly() {
        let solution = solve(&demo_frame());
        assert!(solution.warnings.is_empty());
        assert!(solution.results.corner_reaction_force_n > 0.0);
    }

    #[test]
    fn demo_beam_reports_overhang_load() {
        let solution = solve(&demo_beam());
        assert_eq!(
            solution.warnings,
            vec![SolveWarning::LoadOutsideSpan {
                index: 2,
                position_mm: 2400.0
            }]
        );
    }
}
