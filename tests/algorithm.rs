//! Validates geometry helpers, graph construction, and relaxation behavior

use gbipg::algorithm::crevice::fill_crevices;
use gbipg::algorithm::graph::{PackingGraph, TIE_EPSILON};
use gbipg::algorithm::placement::place_seeds;
use gbipg::algorithm::seed::Seed;
use gbipg::algorithm::solver::solve_and_render;
use gbipg::io::configuration::{PlacementStrategy, PlateConfig};
use gbipg::math::{distance, distance_squared, index_to_coord, raster_index};
use gbipg::spatial::mask::{
    BLACK, WHITE, nearest_obstruction_distance, nearest_opposite_distance,
};
use gbipg::spatial::{Canvas, PixelClass};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn white_plate(size: usize) -> Canvas {
    Canvas::new(size, size, WHITE)
}

fn default_config() -> PlateConfig {
    let Ok(config) = PlateConfig::with_size(800) else {
        unreachable!("default palettes must parse");
    };
    config
}

fn seed_at(x: i32, y: i32, canvas: &Canvas) -> Seed {
    let Some(seed) = Seed::at(x, y, canvas) else {
        unreachable!("seed must land on a sentinel pixel");
    };
    seed
}

#[test]
fn test_distance_helpers_agree() {
    let a: [f64; 2] = [3.0, 4.0];
    let b: [f64; 2] = [0.0, 0.0];
    assert!((distance_squared(a, b) - 25.0).abs() < f64::EPSILON);
    assert!((distance(a, b) - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_raster_index_round_trip() {
    let width = 800;
    let index = raster_index(123, 456, width);
    assert_eq!(index, 456 * 800 + 123);
    assert_eq!(index_to_coord(index, width), [123, 456]);
}

#[test]
fn test_disk_rendering_reports_foreign_colors() {
    let mut canvas = white_plate(100);
    canvas.draw_disk([50, 50], 10.0, [7, 7, 7, 255]);

    assert_eq!(canvas.get(50, 50), Some([7, 7, 7, 255]));
    assert_eq!(canvas.get(50, 65), Some(WHITE));
    assert_eq!(PixelClass::classify([7, 7, 7, 255]), None);
}

#[test]
fn test_nearest_opposite_distance_finds_boundary() {
    let mut canvas = white_plate(100);
    canvas.put(60, 50, BLACK);

    // From a ground pixel the nearest figure pixel is 10 away
    let found = nearest_opposite_distance(&canvas, [50, 50], PixelClass::Ground, 15.0);
    assert!(found.is_some_and(|d| (d - 10.0).abs() < 1e-9));

    // Outside the scan limit nothing is reported
    assert!(nearest_opposite_distance(&canvas, [50, 50], PixelClass::Ground, 9.0).is_none());
}

#[test]
fn test_obstruction_scan_sees_drawn_circles() {
    let mut canvas = white_plate(100);
    canvas.draw_disk([60, 50], 1.0, [7, 7, 7, 255]);

    // The drawn color is neither sentinel, so the opposite-class scan
    // ignores it while the obstruction scan does not
    assert!(nearest_opposite_distance(&canvas, [50, 50], PixelClass::Ground, 15.0).is_none());
    let found = nearest_obstruction_distance(&canvas, [50, 50], PixelClass::Ground, 15.0);
    assert!(found.is_some_and(|d| (d - 9.0).abs() < 1e-9));
}

#[test]
fn test_seed_predicates() {
    let mut canvas = white_plate(800);
    canvas.draw_disk([400, 400], 40.0, BLACK);
    let config = default_config();

    // Black region seed classifies as figure
    let figure_seed = seed_at(400, 400, &canvas);
    assert_eq!(figure_seed.class(), PixelClass::Figure);

    // A seed just inside the wall has no clearance for a minimum circle
    let rim = seed_at(400 + 358, 400, &canvas);
    assert!(rim.overlaps_wall(&config));
    let center = seed_at(300, 400, &canvas);
    assert!(!center.overlaps_wall(&config));

    // A ground seed hugging the figure overlaps the boundary
    let hugging = seed_at(400 + 43, 400, &canvas);
    assert_eq!(hugging.class(), PixelClass::Ground);
    assert!(hugging.overlaps_boundary(&canvas, config.min_circle_radius));
    assert!(!center.overlaps_boundary(&canvas, config.min_circle_radius));

    // Spacing predicate uses twice the minimum radius
    let close = seed_at(305, 400, &canvas);
    assert!(center.overlaps_seed(&close, config.min_circle_radius));
    let far = seed_at(320, 400, &canvas);
    assert!(!center.overlaps_seed(&far, config.min_circle_radius));
}

#[test]
fn test_colinear_seeds_graph_bounds_and_edges() {
    let canvas = white_plate(800);
    let config = default_config();

    let seeds = [
        seed_at(350, 400, &canvas),
        seed_at(370, 400, &canvas),
        seed_at(450, 400, &canvas),
    ];
    let graph = PackingGraph::build(PixelClass::Ground, &seeds, &canvas, &config);

    // Mutual 20px pair binds at 20 - 5 = 15; the far node binds at 80 - 5 = 75
    let bounds: Vec<f64> = graph.nodes.iter().map(|n| n.max_radius).collect();
    assert!((bounds.first().copied().unwrap_or(0.0) - 15.0).abs() < TIE_EPSILON);
    assert!((bounds.get(1).copied().unwrap_or(0.0) - 15.0).abs() < TIE_EPSILON);
    assert!((bounds.get(2).copied().unwrap_or(0.0) - 75.0).abs() < TIE_EPSILON);

    let neighbors: Vec<Vec<usize>> = graph.nodes.iter().map(|n| n.neighbors.clone()).collect();
    assert_eq!(neighbors.first(), Some(&vec![1]));
    assert_eq!(neighbors.get(1), Some(&vec![0, 2]));
    assert_eq!(neighbors.get(2), Some(&vec![1]));
}

#[test]
fn test_colinear_seeds_relaxation_commits_in_order() {
    let canvas = white_plate(800);
    let config = default_config();

    let seeds = [
        seed_at(350, 400, &canvas),
        seed_at(370, 400, &canvas),
        seed_at(450, 400, &canvas),
    ];
    let mut graph = PackingGraph::build(PixelClass::Ground, &seeds, &canvas, &config);
    let build_bounds: Vec<f64> = graph.nodes.iter().map(|n| n.max_radius).collect();

    let mut render = canvas.clone();
    let mut rng = StdRng::seed_from_u64(1);
    let circles = solve_and_render(
        &mut graph,
        &mut render,
        &config,
        &config.ground_palette,
        &mut rng,
    );

    // First in list claims 15, its neighbor inherits the 5px slack, the
    // far node is capped by the configured maximum radius (40 < 75)
    let radii: Vec<f64> = circles.iter().map(|c| c.radius).collect();
    assert!((radii.first().copied().unwrap_or(0.0) - 15.0).abs() < 1e-9);
    assert!((radii.get(1).copied().unwrap_or(0.0) - 5.0).abs() < 1e-9);
    assert!((radii.get(2).copied().unwrap_or(0.0) - 40.0).abs() < 1e-9);

    // Bounds only ever shrink and committed radii never exceed them
    for (node, build_bound) in graph.nodes.iter().zip(&build_bounds) {
        assert!(node.max_radius <= build_bound + 1e-9);
        assert!(node.radius <= node.max_radius + 1e-9);
    }

    // Touching circles are legal; overlapping ones are not
    for (i, a) in circles.iter().enumerate() {
        for b in circles.iter().skip(i + 1) {
            let centers = distance(
                [a.x as f64, a.y as f64],
                [b.x as f64, b.y as f64],
            );
            assert!(centers + 1e-9 >= a.radius + b.radius);
        }
    }
}

#[test]
fn test_equidistant_neighbors_both_become_edges() {
    let canvas = white_plate(800);
    let config = default_config();

    let seeds = [
        seed_at(400, 300, &canvas),
        seed_at(400, 500, &canvas),
        seed_at(400, 400, &canvas),
    ];
    let graph = PackingGraph::build(PixelClass::Ground, &seeds, &canvas, &config);

    // The middle node is capped by both outer nodes simultaneously
    let middle: Vec<usize> = graph
        .nodes
        .get(2)
        .map(|n| n.neighbors.clone())
        .unwrap_or_default();
    assert_eq!(middle, vec![0, 1]);
}

#[test]
fn test_boundary_bound_clears_adjacency() {
    let mut canvas = white_plate(800);
    // A figure blob 8px from the seed, closer than its 15px node bound
    canvas.draw_disk([408, 400], 1.0, BLACK);
    let config = default_config();

    let seeds = [seed_at(400, 400, &canvas), seed_at(420, 400, &canvas)];
    let graph = PackingGraph::build(PixelClass::Ground, &seeds, &canvas, &config);

    let Some(node) = graph.nodes.first() else {
        unreachable!("graph preserves the seed list");
    };
    assert!(node.max_radius < 15.0 - TIE_EPSILON);
    assert!(node.neighbors.is_empty());
}

#[test]
fn test_rendered_circles_cap_nodes_without_shared_edges() {
    let canvas = white_plate(800);
    let config = default_config();

    // Nodes 0 and 2 are 30 apart but each is capped by a closer neighbor,
    // so no edge links them; only the canvas rescan can keep node 2 from
    // claiming its relaxed bound of 23 over node 0's rendered circle
    let seeds = [
        seed_at(400, 400, &canvas),
        seed_at(400, 380, &canvas),
        seed_at(430, 400, &canvas),
        seed_at(430, 428, &canvas),
    ];
    let mut graph = PackingGraph::build(PixelClass::Ground, &seeds, &canvas, &config);

    let neighbors: Vec<Vec<usize>> = graph.nodes.iter().map(|n| n.neighbors.clone()).collect();
    assert_eq!(neighbors.first(), Some(&vec![1]));
    assert_eq!(neighbors.get(2), Some(&vec![3]));

    let mut render = canvas.clone();
    let mut rng = StdRng::seed_from_u64(1);
    let circles = solve_and_render(
        &mut graph,
        &mut render,
        &config,
        &config.ground_palette,
        &mut rng,
    );

    let radii: Vec<f64> = circles.iter().map(|c| c.radius).collect();
    assert!((radii.first().copied().unwrap_or(0.0) - 15.0).abs() < 1e-9);
    assert!((radii.get(1).copied().unwrap_or(0.0) - 5.0).abs() < 1e-9);
    assert!((radii.get(2).copied().unwrap_or(0.0) - 15.0).abs() < 1e-9);
    assert!((radii.get(3).copied().unwrap_or(0.0) - 13.0).abs() < 1e-9);

    for (i, a) in circles.iter().enumerate() {
        for b in circles.iter().skip(i + 1) {
            let centers = distance([a.x as f64, a.y as f64], [b.x as f64, b.y as f64]);
            assert!(centers + 1e-9 >= a.radius + b.radius);
        }
    }
}

#[test]
fn test_crevice_ceiling_budgets_only_the_coverage_phase() {
    let mut canvas = white_plate(800);
    // Obstruct every wall-contained candidate so both phases run dry
    canvas.draw_disk([400, 400], 370.0, [9, 9, 9, 255]);

    let mut config = default_config();
    config.crevice_warmup_iterations = 50;
    config.crevice_iteration_ceiling = 30;

    let mut rng = StdRng::seed_from_u64(5);
    let outcome = fill_crevices(&mut canvas, &config, &mut rng, 0.0);

    assert!(outcome.placed.is_empty());
    assert!(!outcome.reached_target);
    assert_eq!(outcome.attempts, 80);
}

#[test]
fn test_grid_jitter_respects_wall_and_boundary() {
    let mut canvas = white_plate(800);
    canvas.draw_disk([400, 400], 60.0, BLACK);
    let config = default_config();

    let mut rng = StdRng::seed_from_u64(3);
    let seeds = place_seeds(&canvas, &config, &mut rng);

    assert!(!seeds.is_empty());
    for seed in seeds.figure.iter().chain(&seeds.ground) {
        assert!(!seed.overlaps_wall(&config));
        assert!(!seed.overlaps_boundary(&canvas, config.min_circle_radius));
    }
    for seed in &seeds.figure {
        assert_eq!(seed.class(), PixelClass::Figure);
    }
    for seed in &seeds.ground {
        assert_eq!(seed.class(), PixelClass::Ground);
    }
}

#[test]
fn test_rejection_sampling_keeps_same_class_spacing() {
    let mut canvas = white_plate(800);
    canvas.draw_disk([400, 400], 60.0, BLACK);
    let mut config = default_config();
    config.placement = PlacementStrategy::RejectionSampling;

    let mut rng = StdRng::seed_from_u64(3);
    let seeds = place_seeds(&canvas, &config, &mut rng);

    assert!(!seeds.is_empty());
    for list in [&seeds.figure, &seeds.ground] {
        for (i, a) in list.iter().enumerate() {
            for b in list.iter().skip(i + 1) {
                assert!(!a.overlaps_seed(b, config.min_circle_radius));
            }
        }
    }
}
