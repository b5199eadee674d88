use roster_gen::{CliConfig, LocalStorage, RosterEngine, RosterPipeline};
use std::path::Path;
use tempfile::TempDir;

fn write_inputs(dir: &Path, roster: &str, template: &str) -> CliConfig {
    let roster_path = dir.join("roster.csv");
    let template_path = dir.join("vb.html");
    let output_path = dir.join("index.html");
    std::fs::write(&roster_path, roster).unwrap();
    std::fs::write(&template_path, template).unwrap();

    CliConfig {
        roster_path: roster_path.to_str().unwrap().to_string(),
        template_path: template_path.to_str().unwrap().to_string(),
        output_path: output_path.to_str().unwrap().to_string(),
        layout: "special-guest".to_string(),
        layout_config: None,
        verbose: false,
    }
}

fn run(config: CliConfig) -> roster_gen::Result<roster_gen::core::engine::RunSummary> {
    let storage = LocalStorage::default();
    let pipeline = RosterPipeline::new(storage, config);
    let engine = RosterEngine::new(pipeline);
    tokio_test::block_on(engine.run())
}

#[test]
fn test_round_trip_with_special_guest() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_inputs(
        temp_dir.path(),
        "number,first_name,last_name\n1,Amy,Lee\n2,Bo,Chan\n15,Bella,W\n",
        "<html><body><div class=\"gridster\"><ul></ul></div></body></html>",
    );
    let output_path = config.output_path.clone();

    let summary = run(config).unwrap();
    assert_eq!(summary.player_count, 3);
    assert_eq!(summary.output_path, output_path);

    let html = std::fs::read_to_string(&output_path).unwrap();

    // Bella at the reserved front-right cell.
    assert!(html.contains(
        "<li data-row=\"1\" data-col=\"3\" data-sizex=\"1\" data-sizey=\"1\"><h1>15</h1><h2>Bella<br>W</h2></li>"
    ));

    // The two pool players at the first two row-4 positions.
    assert!(html.contains(
        "<li data-row=\"4\" data-col=\"1\" data-sizex=\"1\" data-sizey=\"1\"><h1>1</h1><h2>Amy<br>Lee</h2></li>"
    ));
    assert!(html.contains(
        "<li data-row=\"4\" data-col=\"2\" data-sizex=\"1\" data-sizey=\"1\"><h1>2</h1><h2>Bo<br>Chan</h2></li>"
    ));

    // Eight fixed blanks and exactly one NET divider.
    assert_eq!(html.matches("class=\"blank\"").count(), 8);
    assert_eq!(html.matches("NET").count(), 1);

    let net = html.find("NET").unwrap();
    let gridster = html.find("<div class=\"gridster\">").unwrap();
    assert!(net < gridster);
}

#[test]
fn test_second_run_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let roster = "number,first_name,last_name\n1,Amy,Lee\n15,Bella,W\n";
    let template = "<html><body><div class=\"gridster\"><ul></ul></div></body></html>";

    let config = write_inputs(temp_dir.path(), roster, template);
    let first_output = config.output_path.clone();
    run(config).unwrap();

    // Feed the generated page back in as the template.
    let generated = std::fs::read_to_string(&first_output).unwrap();
    let mut config = write_inputs(temp_dir.path(), roster, &generated);
    config.output_path = temp_dir
        .path()
        .join("second.html")
        .to_str()
        .unwrap()
        .to_string();
    let second_output = config.output_path.clone();
    run(config).unwrap();

    let second = std::fs::read_to_string(&second_output).unwrap();
    assert_eq!(generated, second);
    assert_eq!(second.matches("NET").count(), 1);
}

#[test]
fn test_commented_decoy_list_is_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_inputs(
        temp_dir.path(),
        "number,first_name,last_name\n1,Amy,Lee\n",
        "<div class=\"gridster\">\n<!--<ul><li>decoy</li></ul>-->\n<ul><li>old</li></ul>\n</div>",
    );
    let output_path = config.output_path.clone();

    run(config).unwrap();

    let html = std::fs::read_to_string(&output_path).unwrap();
    assert!(html.contains("<!--<ul><li>decoy</li></ul>-->"));
    assert!(!html.contains("<li>old</li>"));
    assert!(html.contains("<h2>Amy<br>Lee</h2>"));
}

#[test]
fn test_captions_layout() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = write_inputs(
        temp_dir.path(),
        "number,first_name,last_name\n15,Bella,W\n1,Amy,Lee\n",
        "<div class=\"gridster\"><ul></ul></div>",
    );
    config.layout = "captions".to_string();
    let output_path = config.output_path.clone();

    run(config).unwrap();

    let html = std::fs::read_to_string(&output_path).unwrap();
    assert!(html.contains("<h2>Front Center</h2>"));
    assert!(html.contains("<h2>Back Center</h2>"));

    // No reserved cell in this layout: Bella leads the pool at (4,1).
    assert!(html.contains(
        "<li data-row=\"4\" data-col=\"1\" data-sizex=\"1\" data-sizey=\"1\"><h1>15</h1><h2>Bella<br>W</h2></li>"
    ));
    assert_eq!(html.matches("class=\"caption\"").count(), 2);
    assert_eq!(html.matches("class=\"blank\"").count(), 9);
}

#[test]
fn test_custom_layout_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = write_inputs(
        temp_dir.path(),
        "number,first_name,last_name\n1,Amy,Lee\n2,Bo,Chan\n3,Cat,Doe\n",
        "<div class=\"gridster\"><ul></ul></div>",
    );

    let layout_path = temp_dir.path().join("layout.toml");
    std::fs::write(&layout_path, "[grid]\npool_start_row = 1\npool_columns = 2\n").unwrap();
    config.layout_config = Some(layout_path.to_str().unwrap().to_string());
    let output_path = config.output_path.clone();

    run(config).unwrap();

    let html = std::fs::read_to_string(&output_path).unwrap();
    assert!(html.contains("data-row=\"1\" data-col=\"1\""));
    assert!(html.contains("data-row=\"1\" data-col=\"2\""));
    // Third player wraps to the second row.
    assert!(html.contains(
        "<li data-row=\"2\" data-col=\"1\" data-sizex=\"1\" data-sizey=\"1\"><h1>3</h1><h2>Cat<br>Doe</h2></li>"
    ));
}

#[test]
fn test_missing_field_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_inputs(
        temp_dir.path(),
        "number,first_name\n1,Amy\n",
        "<div class=\"gridster\"><ul></ul></div>",
    );
    let output_path = config.output_path.clone();

    let result = run(config);
    assert!(result.is_err());
    assert!(!Path::new(&output_path).exists());
}

#[test]
fn test_template_without_gridster_falls_back_to_last_list() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_inputs(
        temp_dir.path(),
        "number,first_name,last_name\n1,Amy,Lee\n",
        "<nav><ul><li>menu</li></ul></nav><section><ul><li>old</li></ul></section>",
    );
    let output_path = config.output_path.clone();

    run(config).unwrap();

    let html = std::fs::read_to_string(&output_path).unwrap();
    assert!(html.contains("<li>menu</li>"));
    assert!(!html.contains("<li>old</li>"));
    assert!(html.contains("<h2>Amy<br>Lee</h2>"));
}
