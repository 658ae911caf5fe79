use std::io::{self, Write};

use anyhow::Error;

use statics_core::calculations::{AnalysisMode, Solution};
use statics_core::materials::MaterialCatalog;

const RULE: &str = "═══════════════════════════════════════════════";

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let _ = writeln!(out, "  {}", title);
    for (key, value) in rows {
        let _ = writeln!(out, "    {:<width$}  {}", key, value, width = width);
    }
    let _ = writeln!(out);
}

fn format_safety_factor(value: f64) -> String {
    if value.is_infinite() {
        "∞ (unstressed)".to_string()
    } else if value == 0.0 {
        "n/a (no yield strength)".to_string()
    } else {
        format!("{:.2}", value)
    }
}

pub fn print_solution(label: &str, solution: &Solution) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let r = &solution.results;

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {} ({})", label, r.mode.display_name());
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out);

    print_kv_table(
        &mut out,
        "Loads",
        &[
            ("Total applied", format!("{:.1} N", r.total_applied_load_n)),
            ("Members", format!("{}", r.total_beams)),
            ("Load per member", format!("{:.1} N", r.load_per_beam_n)),
        ],
    );

    let mut forces = vec![
        ("R1 / R2", format!("{:.1} N / {:.1} N", r.reaction_left_n, r.reaction_right_n)),
        ("V_max", format!("{:.1} N", r.max_shear_force_n)),
        (
            "M_max",
            format!(
                "{:.1} N·m at {:.0} mm",
                r.max_bending_moment_nm, r.max_moment_position_mm
            ),
        ),
        (
            "δ_max",
            format!(
                "{:.3} mm at {:.0} mm",
                r.max_deflection_m * 1000.0,
                r.max_deflection_position_mm
            ),
        ),
    ];
    if r.mode == AnalysisMode::BaseFrame {
        let c = &r.corner_reactions;
        forces.push((
            "Corners R1..R4",
            format!("{:.1} / {:.1} / {:.1} / {:.1} N", c.r1_n, c.r2_n, c.r3_n, c.r4_n),
        ));
        forces.push(("Corner max", format!("{:.1} N", r.corner_reaction_force_n)));
        forces.push(("Frame self weight", format!("{:.1} N", r.frame_self_weight_n)));
    }
    print_kv_table(&mut out, "Forces", &forces);

    print_kv_table(
        &mut out,
        "Section",
        &[
            ("A", format!("{:.4e} m²", r.cross_section_area_m2)),
            ("I", format!("{:.4e} m⁴", r.moment_of_inertia_m4)),
            ("S", format!("{:.4e} m³", r.section_modulus_m3)),
        ],
    );

    print_kv_table(
        &mut out,
        "Stress",
        &[
            ("σ_max", format!("{:.2} MPa", r.max_normal_stress_mpa)),
            ("τ_max", format!("{:.2} MPa", r.max_shear_stress_mpa)),
            ("Safety factor", format_safety_factor(r.safety_factor)),
        ],
    );

    print_warnings(solution);
}

fn print_warnings(solution: &Solution) {
    if solution.warnings.is_empty() {
        return;
    }
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "  Warnings:");
    for warning in &solution.warnings {
        let _ = writeln!(stderr, "    ⚠ [{}] {}", warning.code(), warning);
    }
    let _ = writeln!(stderr);
}

pub fn print_materials(catalog: &MaterialCatalog) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let _ = writeln!(
        out,
        "  {:<24} {:>10} {:>9} {:>10} {:>6}",
        "Material", "fy (MPa)", "E (GPa)", "ρ (kg/m³)", "ν"
    );
    for m in catalog.entries() {
        let _ = writeln!(
            out,
            "  {:<24} {:>10.1} {:>9.1} {:>10.0} {:>6.2}",
            m.name, m.yield_strength_mpa, m.elastic_modulus_gpa, m.density_kg_m3, m.poissons_ratio
        );
    }
}

pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "  ✗ Error: {}", err);
    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "    Caused by: {}", cause);
    }
    let _ = writeln!(stderr);
}
