mod error;
mod scenario;

use clap::Parser;
use error::AppResult;
use orc_chart::{render_hs, render_ts};
use orc_core::units::k;
use orc_cycle::{solve, CycleError, CycleParameters};
use orc_fluids::{saturation_dome, CorrelationModel, PropertyModel, WorkingFluid};
use orc_results::{ResultsStore, RunSummary};
use scenario::Overrides;
use std::path::PathBuf;

/// Temperature margin below the condenser the dome sweep starts at [K].
const DOME_FLOOR_MARGIN_K: f64 = 20.0;
const DOME_POINTS: usize = 200;

#[derive(Parser)]
#[command(name = "orc-cli")]
#[command(about = "Geothermal binary ORC plant analyzer", long_about = None)]
struct Cli {
    /// Scenario YAML file with cycle parameters
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Working fluid (r245fa, isopentane, n-pentane, n-butane, isobutane, r134a)
    #[arg(long)]
    fluid: Option<String>,

    /// Evaporation temperature in degC
    #[arg(long)]
    evaporation_c: Option<f64>,

    /// Condensation temperature in degC
    #[arg(long)]
    condensation_c: Option<f64>,

    /// Pump isentropic efficiency in (0,1]
    #[arg(long)]
    pump_eta: Option<f64>,

    /// Turbine isentropic efficiency in (0,1]
    #[arg(long)]
    turbine_eta: Option<f64>,

    /// Net power target in kW
    #[arg(long)]
    net_power_kw: Option<f64>,

    /// Output directory for diagrams and summary artifacts
    #[arg(long, default_value = "orc-out")]
    out_dir: PathBuf,

    /// Also print an efficiency comparison across all working fluids
    #[arg(long)]
    fluid_sweep: bool,
}

impl Cli {
    fn flag_overrides(&self) -> Overrides {
        Overrides {
            fluid: self.fluid.clone(),
            evaporation_c: self.evaporation_c,
            condensation_c: self.condensation_c,
            pump_eta: self.pump_eta,
            turbine_eta: self.turbine_eta,
            net_power_kw: self.net_power_kw,
        }
    }
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let params = scenario::resolve(cli.scenario.as_deref(), &cli.flag_overrides())?;

    let model = CorrelationModel::new();
    let solution = solve(&model, &params)?;

    let dome_floor = k(params.t_condensation.value - DOME_FLOOR_MARGIN_K);
    let dome = saturation_dome(&model, params.fluid, dome_floor, DOME_POINTS)?;

    let store = ResultsStore::new(cli.out_dir.clone())?;
    let ts_path = store.artifact_path("ts_diagram.svg");
    let hs_path = store.artifact_path("hs_diagram.svg");
    render_ts(&ts_path, &solution.states, &dome)?;
    render_hs(&hs_path, &solution.states, &dome)?;

    let summary = RunSummary::from_solution(&params, &solution);
    store.write_summary(&summary)?;

    print!("{}", summary.to_text());
    println!();
    println!("✓ T-s diagram: {}", ts_path.display());
    println!("✓ h-s diagram: {}", hs_path.display());
    println!("✓ Summary: {}", store.artifact_path("summary.json").display());

    if cli.fluid_sweep {
        println!();
        print_fluid_sweep(&model, &params);
    }

    Ok(())
}

/// Efficiency comparison of every working fluid at the resolved boundary
/// conditions. Fluids whose domain excludes the evaporation temperature are
/// listed but not solved.
fn print_fluid_sweep(model: &dyn PropertyModel, params: &CycleParameters) {
    println!(
        "Working-fluid comparison at evap {:.1} degC / cond {:.1} degC:",
        params.t_evaporation.value - 273.15,
        params.t_condensation.value - 273.15
    );
    println!("{:<12} {:>12} {:>12}", "Fluid", "eta [%]", "mdot [kg/s]");
    for fluid in WorkingFluid::ALL {
        let candidate = CycleParameters { fluid, ..*params };
        match solve(model, &candidate) {
            Ok(solution) => println!(
                "{:<12} {:>12.2} {:>12.3}",
                fluid.display_name(),
                100.0 * solution.balance.thermal_efficiency,
                solution.balance.mass_flow.value
            ),
            Err(CycleError::Property(_)) => {
                println!("{:<12} {:>12} {:>12}", fluid.display_name(), "-", "-");
            }
            Err(err) => {
                println!("{:<12}  {}", fluid.display_name(), err);
            }
        }
    }
}
