use crate::output::{print_json, print_table};
use pulling_core::anchor::AnchorSetting;
use pulling_core::format;

pub fn run(depth: f64, diameter: Option<f64>, json: bool) -> anyhow::Result<()> {
    let setting = AnchorSetting::compute(depth, diameter)?;

    if json {
        return print_json(&serde_json::json!({
            "anchor_depth_m": setting.anchor_depth_m,
            "dynamic_level_m": setting.dynamic_level_m,
            "dynamic_level_ft": setting.dynamic_level_ft,
            "area_in2": setting.area,
            "tension_lbs": setting.tension,
            "stretch_in": setting.stretch,
            "sentence": setting.sentence(),
        }));
    }

    let rows = vec![
        vec!["anchor depth (m)".to_string(), format::number(setting.anchor_depth_m)],
        vec!["dynamic level (m)".to_string(), format::number(setting.dynamic_level_m)],
        vec!["dynamic level (ft)".to_string(), format::fixed(setting.dynamic_level_ft, 3)],
        vec!["area (in2)".to_string(), format::fixed(setting.area, 4)],
        vec!["tension (lbs)".to_string(), setting.tension_text()],
        vec!["stretch (in)".to_string(), setting.stretch_text()],
    ];
    print_table(&["QUANTITY", "VALUE"], rows);
    Ok(())
}
