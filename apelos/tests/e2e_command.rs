#![cfg(feature = "cli")]

use predicates::{prelude::PredicateBooleanExt, str};
use pretty_assertions::assert_eq;
use test_utilities::*;

fn stdout_of(args: &[&str]) -> String {
	let output = apelos_cmd().args(args).assert().success().get_output().stdout.clone();
	String::from_utf8(output).unwrap()
}

#[test]
fn extent_of_all_layers() {
	let apelos = get_testdata("apelos.geojson");
	let bairros = get_testdata("bairros.geojson");
	let stdout = stdout_of(&["extent", path_arg(&apelos), path_arg(&bairros)]);
	assert_eq!(stdout, "[-43.25,-23,-43.17,-22.89]\n");
}

#[test]
fn extent_skips_features_without_geometry() {
	let apelos = get_testdata("apelos.geojson");
	let stdout = stdout_of(&["extent", path_arg(&apelos)]);
	assert_eq!(stdout, "[-43.2096,-22.9519,-43.1729,-22.9035]\n");
}

#[test]
fn extent_of_configured_layers() {
	let config = get_testdata("viewer.yml");
	let stdout = stdout_of(&["extent", "--config", path_arg(&config), "--fit", "1280x720"]);
	let mut lines = stdout.lines();
	assert_eq!(lines.next(), Some("[-43.25,-23,-43.17,-22.89]"));
	let camera = lines.next().unwrap();
	assert!(camera.starts_with("{\"center\":[-43.210000,-22.945"), "{camera}");
	assert_eq!(lines.next(), None);
}

#[test]
fn extent_of_broken_file() {
	let (_dir, path) = get_temp_output("broken.geojson");
	std::fs::write(&path, r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":7}]}"#).unwrap();
	apelos_cmd()
		.args(["extent", path_arg(&path)])
		.assert()
		.failure()
		.code(1)
		.stdout(str::is_empty())
		.stderr(str::contains("failed to parse"));
}

#[test]
fn locate_neighbourhood() {
	let bairros = get_testdata("bairros.geojson");
	let centro = stdout_of(&["locate", "-43.18", "-22.9", path_arg(&bairros), "--property", "BAIRRO"]);
	assert_eq!(centro, "Centro\n");
	let copacabana = stdout_of(&["locate", "-43.185", "-22.97", path_arg(&bairros), "-p", "BAIRRO"]);
	assert_eq!(copacabana, "Copacabana\n");
	let ocean = stdout_of(&["locate", "-43.0", "-23.5", path_arg(&bairros), "-p", "BAIRRO"]);
	assert_eq!(ocean, "");
}

#[test]
fn locate_prints_feature_collection() {
	let bairros = get_testdata("bairros.geojson");
	let stdout = stdout_of(&["locate", "-43.245", "-22.995", path_arg(&bairros)]);
	assert!(stdout.starts_with("{\"features\":[{"), "{stdout}");
	assert!(stdout.contains("\"BAIRRO\":\"Copacabana\""));
	assert!(!stdout.contains("Centro"));
}

#[test]
fn clean_then_popup() {
	let (_dir, output) = get_temp_output("apelos_clean.geojson");
	let input = get_testdata("apelos.geojson");
	apelos_cmd()
		.args(["clean", path_arg(&input), path_arg(&output)])
		.assert()
		.success()
		.stdout(str::is_empty());

	let popup = stdout_of(&["popup", path_arg(&output)]);
	assert_eq!(
		popup,
		"<div class=\"popup-content\">\n  <h3>Apelo 1</h3>\n  <p>Iluminação pública Rua do Catete, em frente ao nº 120.</p>\n  <a href=\"https://camara.rio/apelos/1.pdf\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"popup-link\">Ver documento →</a>\n</div>\n"
	);

	let sidebar = stdout_of(&["popup", "--index", "3", "--sidebar", path_arg(&output)]);
	assert!(sidebar.starts_with("<h3>Sem informação</h3>\n"), "{sidebar}");
	assert!(!sidebar.contains("info-link"));
}

#[test]
fn convert_kml_then_extent_and_locate() {
	let (_dir, output) = get_temp_output("apelos.geojson");
	let input = get_testdata("apelos.kml");
	apelos_cmd()
		.args(["convert", path_arg(&input), path_arg(&output)])
		.assert()
		.success()
		.stdout(str::is_empty());

	let extent = stdout_of(&["extent", path_arg(&output)]);
	assert_eq!(extent, "[-43.2,-22.9352,-43.16,-22.89]\n");

	let centro = stdout_of(&["locate", "-43.18", "-22.9", path_arg(&output), "-p", "Name"]);
	assert_eq!(centro, "Centro\n");
}

#[test]
fn convert_missing_kml() {
	let (_dir, output) = get_temp_output("apelos.geojson");
	apelos_cmd()
		.args(["convert", "missing.kml", path_arg(&output)])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("input file not found at \"missing.kml\""));
	assert!(!output.exists());
}

#[test]
fn popup_index_out_of_range() {
	let apelos = get_testdata("apelos.geojson");
	apelos_cmd()
		.args(["popup", "-i", "5", path_arg(&apelos)])
		.assert()
		.failure()
		.code(1)
		.stderr(str::contains("it has 5 features"));
}

#[test]
fn style_with_key() {
	let config = get_testdata("viewer.yml");
	let stdout = String::from_utf8(
		apelos_cmd()
			.env("MAPTILER_KEY", "abc")
			.args(["style", "--config", path_arg(&config)])
			.assert()
			.success()
			.get_output()
			.stdout
			.clone(),
	)
	.unwrap();
	assert!(stdout.contains("style.json?key=abc"), "{stdout}");
	assert!(stdout.contains("\"apelos-clusters\""));
	assert!(stdout.contains("\"data/bairros.geojson\""));
	assert!(stdout.contains("\"maxWidth\": \"400px\""), "{stdout}");
	assert!(stdout.contains("\"FullscreenControl\""));
}

#[test]
fn style_without_key() {
	apelos_cmd()
		.args(["style", "--data-url", "/geo/"])
		.assert()
		.success()
		.stdout(str::contains("\"/geo/apelos_clean.geojson\""))
		.stdout(str::contains("maptiler").not())
		.stderr(str::contains("MapTiler API key not found"));
}
