//! Text showcase over an animated grid floor, headless.
//!
//! Mirrors the intended integration flow: the first build runs before the
//! font loader has delivered glyph geometry (the centerpiece is skipped with
//! a warning), then the scene is rebuilt once the attribute streams arrive.

use anyhow::Result;
use glam::{Vec2, Vec3, Vec4};

use vitrine::compose::{
    BackdropConfig, CenterpieceConfig, CenterpieceGeometry, CenterpieceMaterial, Motion,
    ShowcaseConfig, build_showcase,
};
use vitrine::{ExtrudedTextOptions, FrameTiming, Geometry};

fn text_config(source: Option<Geometry>) -> ShowcaseConfig {
    ShowcaseConfig {
        background: Some(Vec4::new(0.0, 0.0, 0.0, 1.0)),
        centerpiece: Some(
            CenterpieceConfig::new(
                CenterpieceGeometry::ExtrudedText {
                    text: "VITRINE".to_string(),
                    options: ExtrudedTextOptions::default(),
                    source,
                },
                CenterpieceMaterial::ColorShift {
                    color: Vec3::new(0.05, 0.2, 0.1),
                },
            )
            .with_motion(Motion::Sway {
                speed: 0.5,
                amplitude: 0.2,
            }),
        ),
        backdrop: Some(BackdropConfig::default()),
        ..ShowcaseConfig::default()
    }
}

/// Stand-in for the font loader's output: a single extruded quad.
fn placeholder_glyph() -> Result<Geometry> {
    let positions = vec![
        Vec3::new(-1.0, -0.5, 0.0),
        Vec3::new(1.0, -0.5, 0.0),
        Vec3::new(1.0, 0.5, 0.0),
        Vec3::new(-1.0, 0.5, 0.0),
    ];
    let normals = vec![Vec3::Z; 4];
    let uvs = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];
    let indices = vec![0, 1, 2, 0, 2, 3];
    Ok(Geometry::from_raw(positions, normals, uvs, indices)?)
}

fn main() -> Result<()> {
    env_logger::init();

    // Fonts not loaded yet: the backdrop still animates.
    let early = build_showcase(text_config(None))?;
    assert!(early.centerpiece.is_none());
    println!("early build: backdrop only, {} drivers", early.playbook().len());

    // Glyph streams delivered, rebuild with the real centerpiece.
    let mut showcase = build_showcase(text_config(Some(placeholder_glyph()?)))?;
    showcase.set_viewport(1920.0, 1080.0);

    let centerpiece = showcase
        .centerpiece
        .ok_or_else(|| anyhow::anyhow!("centerpiece missing"))?;

    let dt = 1.0 / 60.0;
    for frame in 0..300u32 {
        let elapsed = frame as f32 * dt;
        showcase.advance(FrameTiming::new(elapsed, dt));

        if frame % 60 == 0 {
            if let Some(node) = showcase.scene.get_node(centerpiece) {
                println!("t={elapsed:4.2}s sway.y={:+.4}", node.transform.rotation.y);
            }
        }
    }

    Ok(())
}
