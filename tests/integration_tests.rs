/*
 * Integration tests for cmhw
 *
 * These tests drive the process-wide platform API against temporary
 * directories laid out like a device's sysfs.
 */

use cmhw::{
    configure, display_color_calibration, load_config, platform, vibrator, CmhwError,
    ProviderConfig, UndetectedPolicy,
};
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const RGB: &str = "sys/class/graphics/fb0/rgb";
const KCAL: &str = "sys/class/graphics/fb0/kcal";
const TSPDRV: &str = "sys/devices/platform/tspdrv/nforce_timed";
const QPNP: &str = "sys/devices/virtual/timed_output/vibrator/vtg_level";

// Test utilities
fn create_device(nodes: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (relative, content) in nodes {
        let full = dir.path().join(relative);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }
    dir
}

fn use_device(dir: &TempDir, policy: UndetectedPolicy) {
    configure(&ProviderConfig {
        sysfs_root: dir.path().to_path_buf(),
        undetected_policy: policy,
    });
}

#[test]
#[serial]
fn test_rgb_variant_ranges() {
    let device = create_device(&[(RGB, "32768 32768 32768\n")]);
    use_device(&device, UndetectedPolicy::Strict);

    assert!(display_color_calibration::is_supported());
    assert_eq!(display_color_calibration::get_max_value().unwrap(), 32768);
    assert_eq!(display_color_calibration::get_min_value().unwrap(), 255);
    assert_eq!(display_color_calibration::get_def_value().unwrap(), 32768);
}

#[test]
#[serial]
fn test_kcal_variant_ranges() {
    let device = create_device(&[(KCAL, "255 255 255\n")]);
    use_device(&device, UndetectedPolicy::Strict);

    assert!(display_color_calibration::is_supported());
    assert_eq!(display_color_calibration::get_max_value().unwrap(), 255);
    assert_eq!(display_color_calibration::get_min_value().unwrap(), 35);
    assert_eq!(
        display_color_calibration::get_def_value().unwrap(),
        display_color_calibration::get_max_value().unwrap()
    );
}

#[test]
#[serial]
fn test_both_color_nodes_prefers_rgb() {
    let device = create_device(&[(RGB, "1 1 1\n"), (KCAL, "2 2 2\n")]);
    use_device(&device, UndetectedPolicy::Strict);

    assert!(display_color_calibration::is_supported());
    assert_eq!(display_color_calibration::get_cur_colors().unwrap(), "1 1 1");
}

#[test]
#[serial]
fn test_color_round_trip() {
    let device = create_device(&[(KCAL, "255 255 255\n")]);
    use_device(&device, UndetectedPolicy::Strict);

    assert!(display_color_calibration::is_supported());
    assert!(display_color_calibration::set_colors("200 180 160"));
    assert_eq!(display_color_calibration::get_cur_colors().unwrap(), "200 180 160");
    assert_eq!(
        fs::read_to_string(device.path().join(KCAL)).unwrap(),
        "200 180 160"
    );
}

#[test]
#[serial]
fn test_no_vibrator_driver() {
    let device = create_device(&[(RGB, "1 1 1\n")]);
    use_device(&device, UndetectedPolicy::Strict);

    assert!(!vibrator::is_supported());
    assert!(matches!(
        vibrator::get_max_intensity(),
        Err(CmhwError::NotDetected { .. })
    ));
    assert!(!vibrator::set_intensity(20));
}

#[test]
#[serial]
fn test_vibrator_round_trip() {
    let device = create_device(&[(QPNP, "28\n")]);
    use_device(&device, UndetectedPolicy::Strict);

    assert!(vibrator::is_supported());
    assert_eq!(vibrator::get_cur_intensity().unwrap(), 28);
    assert!(vibrator::set_intensity(15));
    assert_eq!(vibrator::get_cur_intensity().unwrap(), 15);
}

#[test]
#[serial]
fn test_qpnp_ranges_and_threshold() {
    let device = create_device(&[(QPNP, "31\n")]);
    use_device(&device, UndetectedPolicy::Strict);

    assert!(vibrator::is_supported());
    assert_eq!(vibrator::get_max_intensity().unwrap(), 31);
    assert_eq!(vibrator::get_min_intensity().unwrap(), 12);
    assert_eq!(vibrator::get_default_intensity().unwrap(), 28);
    assert_eq!(vibrator::get_warning_threshold().unwrap(), -1);
}

#[test]
#[serial]
fn test_tspdrv_ranges_and_threshold() {
    let device = create_device(&[(TSPDRV, "65\n"), (QPNP, "28\n")]);
    use_device(&device, UndetectedPolicy::Strict);

    assert!(vibrator::is_supported());
    assert_eq!(vibrator::get_max_intensity().unwrap(), 127);
    assert_eq!(vibrator::get_min_intensity().unwrap(), 1);
    assert_eq!(vibrator::get_default_intensity().unwrap(), 65);
    assert_eq!(vibrator::get_warning_threshold().unwrap(), 90);
    assert_eq!(vibrator::get_cur_intensity().unwrap(), 65);
}

#[test]
#[serial]
fn test_malformed_intensity() {
    let device = create_device(&[(TSPDRV, "strong\n")]);
    use_device(&device, UndetectedPolicy::Strict);

    assert!(vibrator::is_supported());
    assert!(matches!(
        vibrator::get_cur_intensity(),
        Err(CmhwError::ParseValue { .. })
    ));
}

#[test]
#[serial]
fn test_write_fails_after_driver_removed() {
    let device = create_device(&[(QPNP, "20\n")]);
    use_device(&device, UndetectedPolicy::Strict);

    assert!(vibrator::is_supported());
    fs::remove_dir_all(device.path().join("sys/devices/virtual")).unwrap();
    assert!(!vibrator::set_intensity(20));
    assert!(matches!(
        vibrator::get_cur_intensity(),
        Err(CmhwError::FileRead { .. })
    ));
}

#[test]
#[serial]
fn test_variant_stays_bound() {
    let device = create_device(&[(KCAL, "255 255 255\n")]);
    use_device(&device, UndetectedPolicy::Strict);
    assert!(display_color_calibration::is_supported());

    // A higher-priority node appearing later does not rebind.
    let rgb = device.path().join(RGB);
    fs::write(&rgb, "32768 32768 32768\n").unwrap();
    assert!(display_color_calibration::is_supported());
    assert_eq!(display_color_calibration::get_max_value().unwrap(), 255);
}

#[test]
#[serial]
fn test_query_before_detect_is_an_error() {
    let device = create_device(&[(RGB, "1 1 1\n")]);
    use_device(&device, UndetectedPolicy::Strict);

    let err = display_color_calibration::get_max_value().unwrap_err();
    assert!(err.is_not_detected());
    assert!(display_color_calibration::get_cur_colors().is_err());
}

#[test]
#[serial]
fn test_secondary_fallback_before_detect() {
    let device = create_device(&[(RGB, "1 1 1\n")]);
    use_device(&device, UndetectedPolicy::SecondaryFallback);

    assert_eq!(display_color_calibration::get_max_value().unwrap(), 255);
    assert_eq!(vibrator::get_max_intensity().unwrap(), 31);
    assert_eq!(vibrator::get_warning_threshold().unwrap(), -1);

    // Detection still binds the writable variant.
    assert!(display_color_calibration::is_supported());
    assert_eq!(display_color_calibration::get_max_value().unwrap(), 32768);
}

#[test]
#[serial]
fn test_configure_from_file() {
    let device = create_device(&[(TSPDRV, "90\n")]);
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("cmhw.json");
    fs::write(
        &config_path,
        serde_json::json!({ "sysfs_root": device.path() }).to_string(),
    )
    .unwrap();

    let config = load_config(&config_path).unwrap();
    assert_eq!(config.sysfs_root, device.path());
    assert_eq!(config.undetected_policy, UndetectedPolicy::Strict);
    configure(&config);

    assert!(vibrator::is_supported());
    assert_eq!(vibrator::get_cur_intensity().unwrap(), 90);
}

#[test]
#[serial]
fn test_platform_reports_json() {
    let device = create_device(&[(RGB, "10 20 30\n"), (QPNP, "12\n")]);
    use_device(&device, UndetectedPolicy::Strict);

    let platform = platform();
    assert!(platform.detect_all());
    let json: serde_json::Value = serde_json::from_str(&platform.reports_json().unwrap()).unwrap();
    assert_eq!(json[0]["driver"], "rgb");
    assert_eq!(json[0]["current_value"], "10 20 30");
    assert_eq!(json[1]["driver"], "qpnp");
    assert!(json[1]["warning_threshold"].is_null());
    assert_eq!(
        Path::new(json[1]["path"].as_str().unwrap()),
        Path::new("/sys/devices/virtual/timed_output/vibrator/vtg_level")
    );
}
