//! Shape catalog tests

use blockfall::core::{
    all_shapes, random_color, random_shape, rotate, shape_of, Board, PieceController,
    PieceSource, Shape,
};
use blockfall::types::{PieceKind, PALETTE_SIZE};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_catalog_order_and_sizes() {
    let shapes = all_shapes();
    assert_eq!(shapes.len(), 7);
    for (kind, shape) in PieceKind::ALL.iter().zip(shapes.iter()) {
        assert_eq!(*shape, shape_of(*kind));
        assert_eq!(shape.filled_count(), 4, "{} has four cells", kind.as_str());
    }
    assert_eq!((shapes[0].width(), shapes[0].height()), (3, 2)); // T
    assert_eq!((shapes[5].width(), shapes[5].height()), (2, 2)); // O
    assert_eq!((shapes[6].width(), shapes[6].height()), (4, 1)); // I
}

#[test]
fn test_catalog_tags_are_one_based_positions() {
    for (i, shape) in all_shapes().iter().enumerate() {
        for (r, c) in shape.cells() {
            assert_eq!(shape.get(r as usize, c as usize), i as u8 + 1);
        }
    }
}

#[test]
fn test_rotate_t_clockwise() {
    let t = shape_of(PieceKind::T);
    let r = rotate(&t);
    assert_eq!(r, Shape::from_rows(&[&[0, 1], &[1, 1], &[0, 1]]));
}

#[test]
fn test_rotate_s_and_l() {
    assert_eq!(
        rotate(&shape_of(PieceKind::S)),
        Shape::from_rows(&[&[2, 0], &[2, 2], &[0, 2]])
    );
    assert_eq!(
        rotate(&shape_of(PieceKind::L)),
        Shape::from_rows(&[&[5, 0], &[5, 0], &[5, 5]])
    );
}

#[test]
fn test_four_rotations_are_identity() {
    for shape in all_shapes() {
        let back = rotate(&rotate(&rotate(&rotate(&shape))));
        assert_eq!(back, shape);
    }
}

#[test]
fn test_no_catalog_shape_blocked_on_empty_board() {
    let board = Board::new(21, 16);
    for shape in all_shapes() {
        let x = 21 / 2 - shape.width() as i32 / 2;
        assert!(!board.is_collision(x, 0, &shape));
    }

    // Same check through the controller for a run of random spawns.
    let mut source = PieceSource::new(99);
    for _ in 0..50 {
        let pc = PieceController::spawn_first(&board, &mut source);
        assert!(!pc.is_spawn_blocked(&board));
        assert_eq!(pc.piece().y, 0);
    }
}

#[test]
fn test_random_draws_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut seen = [false; 7];
    for _ in 0..500 {
        let (kind, shape) = random_shape(&mut rng);
        assert_eq!(shape, shape_of(kind));
        seen[kind.index()] = true;
        assert!(random_color(&mut rng) < PALETTE_SIZE);
    }
    assert!(seen.iter().all(|&s| s), "every kind is drawn eventually");
}
