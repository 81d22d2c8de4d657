// Host-side tests for static geometry, the overlay schedule and the UI tables.

use backdrop_core::ui::*;
use backdrop_core::*;
use std::collections::HashSet;

#[test]
fn grid_wireframe_has_rows_columns_and_diagonals() {
    let grid = WaveGrid::new(10.0, 4);
    let idx = grid.wireframe_indices();
    assert_eq!(idx.len() % 2, 0);
    let edges = idx.len() / 2;
    // 5 rows x 4 + 5 columns x 4 + 16 diagonals
    assert_eq!(edges, 5 * 4 + 5 * 4 + 4 * 4);
    let max = grid.vertex_count() as u32;
    assert!(idx.iter().all(|&i| i < max));
}

#[test]
fn grid_wireframe_edges_are_unique() {
    let grid = WaveGrid::new(10.0, 6);
    let idx = grid.wireframe_indices();
    let mut seen = HashSet::new();
    for pair in idx.chunks(2) {
        let key = (pair[0].min(pair[1]), pair[0].max(pair[1]));
        assert!(seen.insert(key), "duplicate edge {:?}", key);
    }
}

#[test]
fn grid_is_centered_and_spans_size() {
    let grid = WaveGrid::new(200.0, 200);
    let xs = grid.positions().iter().map(|p| p[0]);
    let min_x = xs.clone().fold(f32::INFINITY, f32::min);
    let max_x = xs.fold(f32::NEG_INFINITY, f32::max);
    assert!((min_x + 100.0).abs() < 1e-3);
    assert!((max_x - 100.0).abs() < 1e-3);
    assert!(grid.positions().iter().all(|p| p[1] == 0.0));
}

#[test]
fn icosahedron_has_twelve_vertices_and_thirty_edges() {
    let (verts, idx) = icosahedron_wireframe(1.5);
    assert_eq!(verts.len(), 12);
    assert_eq!(idx.len(), 60);
    for v in &verts {
        let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!((r - 1.5).abs() < 1e-4);
    }
    // Every vertex has five neighbours.
    let mut degree = [0u32; 12];
    for &i in &idx {
        degree[i as usize] += 1;
    }
    assert!(degree.iter().all(|&d| d == 5));
}

#[test]
fn overlay_schedule_defaults_to_half_then_one_second() {
    let s = OverlaySchedule::default();
    assert_eq!(s.fade_delay_ms, 500);
    assert_eq!(s.remove_delay_ms, 1000);
}

#[test]
fn contact_thanks_names_the_sender() {
    assert_eq!(
        contact_thanks("Ada"),
        "Thank you Ada! Your message has been received. We'll get back to you soon."
    );
}

#[test]
fn anchor_target_ignores_bare_hash_and_external_links() {
    assert_eq!(anchor_target("#about"), Some("#about"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("https://example.com/#x"), None);
}

#[test]
fn hover_tables_restore_on_leave() {
    for style in LOGO_HOVER.iter().chain(CARD_HOVER.iter()) {
        assert_ne!(style.enter, style.leave, "{}", style.property);
    }
    assert_eq!(CARD_HOVER[1].leave, "none");
    assert_eq!(REVEAL_HIDDEN[0], ("opacity", "0"));
    assert_eq!(REVEAL_SHOWN[0], ("opacity", "1"));
}

#[test]
fn error_message_is_user_facing() {
    assert!(LOAD_ERROR_MESSAGE.starts_with("Error loading animation."));
}
