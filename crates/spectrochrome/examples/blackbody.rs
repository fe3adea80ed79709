use spectrochrome::error::ConfigError;
use spectrochrome::{illuminant, physics, Chromaticity, ColorConverter};

fn main() -> Result<(), ConfigError> {
    let converter = ColorConverter::builder().build()?;

    println!("\n    Blackbody radiators\n");
    for temperature in [1_000.0, 2_000.0, 2_856.0, 4_000.0, 5_778.0, 6_500.0, 10_000.0, 20_000.0] {
        let xyz = physics::blackbody_color(temperature);
        let rgb = converter.brightest_rgb_from_xyz(xyz, 1.0);
        let (irgb, report) = converter.clip_rgb(rgb);
        let xy = Chromaticity::from_xyz(&xyz);
        println!(
            "    {:>7.0}K  {}  x = {:.4}, y = {:.4}  clipped = {}",
            temperature,
            spectrochrome::hex_from_irgb(&irgb, 2),
            xy.x,
            xy.y,
            report.any(),
        );
    }

    let sky = physics::rayleigh_illuminated_color(&illuminant::d65());
    let rgb = converter.brightest_rgb_from_xyz(sky, 1.0);
    println!("\n    Rayleigh sky under D65: {}\n", converter.hex_from_rgb(rgb));

    Ok(())
}
