use crate::services::dashboard::render_scenario_comparison;

pub fn compare_command() {
    println!("{}", render_scenario_comparison());
}
