//! Static hero scene: two coloured grounds, a shadow catcher, and the wordmark.

use glam::{Mat4, Vec3};

use super::glyphs;
use super::mesh::MeshData;
use crate::config::{LightConfig, PlaneConfig, SceneConfig};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Flat colour, unaffected by light.
    Unlit,
    /// Invisible except where shadowed; alpha scales with the shadow.
    ShadowCatcher { opacity: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: &'static str,
    pub mesh: MeshData,
    pub model: Mat4,
    pub color: Vec3,
    pub material: Material,
    pub casts_shadow: bool,
}

pub fn rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

fn ground(name: &'static str, cfg: &PlaneConfig, material: Material) -> SceneObject {
    SceneObject {
        name,
        mesh: MeshData::plane(cfg.size),
        model: Mat4::from_translation(cfg.center),
        color: rgb(cfg.color),
        material,
        casts_shadow: false,
    }
}

/// Objects in draw order: opaque first, the shadow catcher after them.
pub fn build(scene: &SceneConfig, light: &LightConfig) -> Vec<SceneObject> {
    let text = glyphs::layout(&scene.text);
    log::debug!(
        "wordmark {:?}: {} blocks, width {:.2}",
        scene.text.content,
        text.blocks.len(),
        text.width
    );
    vec![
        ground("back-ground", &scene.back_ground, Material::Unlit),
        ground("front-ground", &scene.front_ground, Material::Unlit),
        SceneObject {
            name: "wordmark",
            mesh: MeshData::from_blocks(&text.blocks),
            model: Mat4::IDENTITY,
            color: rgb(scene.text.color),
            material: Material::Unlit,
            casts_shadow: true,
        },
        ground(
            "shadow-catcher",
            &scene.shadow_plane,
            Material::ShadowCatcher {
                opacity: light.shadow_opacity,
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colours_unpack() {
        assert_eq!(rgb(0xffffff), Vec3::ONE);
        assert_eq!(rgb(0x0052fa), Vec3::new(0.0, 82.0 / 255.0, 250.0 / 255.0));
    }

    #[test]
    fn shadow_catcher_is_drawn_last() {
        let objects = build(&SceneConfig::default(), &LightConfig::default());
        assert_eq!(objects.len(), 4);
        let last = objects.last().unwrap();
        assert_eq!(last.material, Material::ShadowCatcher { opacity: 0.4 });
        assert!(objects[..3].iter().all(|o| o.material == Material::Unlit));
    }

    #[test]
    fn only_the_wordmark_casts_shadows() {
        let objects = build(&SceneConfig::default(), &LightConfig::default());
        let casters: Vec<_> = objects.iter().filter(|o| o.casts_shadow).collect();
        assert_eq!(casters.len(), 1);
        assert_eq!(casters[0].name, "wordmark");
        assert!(!casters[0].mesh.indices.is_empty());
    }

    #[test]
    fn front_ground_back_edge_meets_text_line() {
        let objects = build(&SceneConfig::default(), &LightConfig::default());
        let front = &objects[1];
        let far_edge = front.model.transform_point3(Vec3::new(0.0, 0.0, -100.0));
        assert_eq!(far_edge.z, 0.0);
    }
}
