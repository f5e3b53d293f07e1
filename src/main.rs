use emlab::{draw_charges, grid_survey, streamline_survey, LogSink, Scenario, ScenarioConfig, SurveyConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "dipole.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let scenario_cfg = load_scenario_from_yaml()?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    // All output leaves through the sink; a viewer would substitute its own
    let mut sink = LogSink;
    draw_charges(&scenario.system, &mut sink);

    match scenario.survey {
        SurveyConfig::Grid => {
            grid_survey(
                &scenario.system,
                scenario.sampler.as_ref(),
                &scenario.parameters,
                &mut sink,
            );
        }
        SurveyConfig::Streamlines => {
            streamline_survey(
                &scenario.system,
                scenario.sampler.as_ref(),
                &scenario.parameters,
                &mut sink,
            );
        }
        SurveyConfig::Both => {
            grid_survey(
                &scenario.system,
                scenario.sampler.as_ref(),
                &scenario.parameters,
                &mut sink,
            );
            streamline_survey(
                &scenario.system,
                scenario.sampler.as_ref(),
                &scenario.parameters,
                &mut sink,
            );
        }
    }

    Ok(())
}
