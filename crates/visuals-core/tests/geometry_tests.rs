use glam::Vec3;
use visuals_core::geometry::{
    cylinder, heart_point, helix_layout, icosphere, scatter_points, torus, uv_sphere, Mesh,
};

fn assert_well_formed(mesh: &Mesh) {
    assert_eq!(mesh.indices.len() % 3, 0);
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n));
}

#[test]
fn icosphere_counts() {
    for detail in [0u32, 1, 3, 7] {
        let mesh = icosphere(1.0, detail);
        let cols = (detail + 1) as usize;
        assert_eq!(mesh.triangle_count(), 20 * cols * cols);
        assert_eq!(mesh.vertices.len(), 20 * (cols + 1) * (cols + 2) / 2);
        assert_well_formed(&mesh);
    }
}

#[test]
fn icosphere_vertices_lie_on_radius_with_unit_normals() {
    let mesh = icosphere(2.0, 5);
    for v in &mesh.vertices {
        let p = Vec3::from(v.position);
        let n = Vec3::from(v.normal);
        assert!((p.length() - 2.0).abs() < 1e-4);
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!(p.normalize().dot(n) > 0.9999);
    }
}

#[test]
fn icosphere_triangles_face_outward() {
    let mesh = icosphere(1.0, 2);
    for tri in mesh.indices.chunks(3) {
        let [a, b, c] = [0, 1, 2].map(|k| Vec3::from(mesh.vertices[tri[k] as usize].position));
        let face_normal = (b - a).cross(c - a);
        let centre = (a + b + c) / 3.0;
        assert!(face_normal.dot(centre) > 0.0);
    }
}

#[test]
fn uv_sphere_skips_pole_slivers() {
    let mesh = uv_sphere(1.0, 16, 8);
    assert_eq!(mesh.vertices.len(), 17 * 9);
    assert_eq!(mesh.triangle_count(), 2 * 16 * (8 - 1));
    assert_well_formed(&mesh);
}

#[test]
fn torus_counts_and_extent() {
    let mesh = torus(1.8, 0.02, 16, 100);
    assert_eq!(mesh.triangle_count(), 2 * 16 * 100);
    assert_well_formed(&mesh);
    for v in &mesh.vertices {
        let p = Vec3::from(v.position);
        let ring = (p.x * p.x + p.y * p.y).sqrt();
        assert!((ring - 1.8).abs() <= 0.0201);
        assert!(p.z.abs() <= 0.0201);
    }
}

#[test]
fn cylinder_is_an_open_tube() {
    let mesh = cylinder(0.5, 6.0, 8);
    assert_eq!(mesh.triangle_count(), 16);
    for v in &mesh.vertices {
        assert!((v.position[1].abs() - 3.0).abs() < 1e-6);
    }
}

#[test]
fn heart_point_widens_upper_lobes_only() {
    let top = heart_point(Vec3::new(1.0, 0.5, 1.0));
    assert!((top.x - 1.2 * 1.25).abs() < 1e-6);
    assert!((top.y - 0.6).abs() < 1e-6);
    assert!((top.z - 0.8).abs() < 1e-6);

    let bottom = heart_point(Vec3::new(1.0, -0.5, 0.0));
    assert!((bottom.x - 1.2).abs() < 1e-6);
}

#[test]
fn recomputed_normals_are_unit_length() {
    let mut mesh = uv_sphere(1.0, 12, 12);
    mesh.recompute_normals();
    for v in &mesh.vertices {
        let len = Vec3::from(v.normal).length();
        assert!(len == 0.0 || (len - 1.0).abs() < 1e-4);
    }
}

#[test]
fn helix_is_centred_vertically() {
    let steps = helix_layout(60, 3.0, 0.5, 0.3);
    assert_eq!(steps.len(), 60);
    assert_eq!(steps[0].y, -15.0);
    assert_eq!(steps[30].y, 0.0);
    for s in &steps {
        let r = (s.strand_a.x.powi(2) + s.strand_a.z.powi(2)).sqrt();
        assert!((r - 3.0).abs() < 1e-5);
    }
}

#[test]
fn rung_spans_both_strands() {
    for s in helix_layout(12, 3.0, 0.5, 0.3) {
        let m = s.rung_transform();
        // Cylinder ends sit at local y = +-radius.
        let end_a = m.transform_point3(Vec3::new(0.0, 3.0, 0.0));
        let end_b = m.transform_point3(Vec3::new(0.0, -3.0, 0.0));
        let hits_a = (end_a - s.strand_a).length() < 1e-4 || (end_b - s.strand_a).length() < 1e-4;
        let hits_b = (end_a - s.strand_b).length() < 1e-4 || (end_b - s.strand_b).length() < 1e-4;
        assert!(hits_a && hits_b, "step {:?}", s);
    }
}

#[test]
fn scatter_is_seeded_and_bounded() {
    let a = scatter_points(200, 5.0, 11);
    let b = scatter_points(200, 5.0, 11);
    let c = scatter_points(200, 5.0, 12);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.iter().all(|v| v.position.iter().all(|x| x.abs() <= 2.5)));
}
