use vitrina_carousel_core::{Carousel, CarouselConfig, ConfigPatch, TransformRecord};

const DT: f32 = 1.0 / 60.0;

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn one_row(n: usize) -> Carousel<usize> {
    let mut c = Carousel::new(CarouselConfig::default());
    c.rebuild(vec![(0..n).collect()]);
    c
}

fn no_snap() -> ConfigPatch {
    ConfigPatch {
        snap_enabled: Some(false),
        ..ConfigPatch::default()
    }
}

fn pos(rec: &TransformRecord<usize>) -> (f32, f32, f32) {
    let p = rec.position.expect("visible record must carry a position");
    (p.x, p.y, p.z)
}

/// it should lay out one row of five items at defaults:
/// 5 records, center item biggest and closest, symmetric neighbours
/// mirrored in x
#[test]
fn five_item_row_first_frame() {
    let mut c = one_row(5);
    let out = c.update(DT);
    assert_eq!(out.records.len(), 5);

    let center = &out.records[0];
    assert!(center.visible);
    let (cx, cy, cz) = pos(center);
    approx(cx, 0.0, 1e-5);
    approx(cy, 0.0, 1e-5);
    approx(cz, 0.0, 1e-5);

    // With default auto-spacing only the center and its two direct
    // neighbours fall inside the field of view.
    let visible: Vec<usize> = out
        .records
        .iter()
        .filter(|r| r.visible)
        .map(|r| r.index)
        .collect();
    assert_eq!(visible, vec![0, 1, 4]);

    let right = &out.records[1];
    let left = &out.records[4];
    let (rx, _, _) = pos(right);
    let (lx, _, _) = pos(left);
    assert!(rx > 0.0 && lx < 0.0, "neighbours not mirrored: {rx} {lx}");
    approx(rx.abs(), lx.abs(), 1e-4);

    let center_scale = center.scale.unwrap();
    for rec in out.records.iter().filter(|r| r.visible && r.index != 0) {
        assert!(center_scale > rec.scale.unwrap());
        assert!(pos(rec).2 > cz, "edge items must recede behind the center");
    }

    // Invisible records carry identity only.
    for rec in out.records.iter().filter(|r| !r.visible) {
        assert!(rec.position.is_none() && rec.rotation.is_none() && rec.scale.is_none());
    }
}

/// it should emit records row-major then index-major, one per item
#[test]
fn record_ordering_is_row_major() {
    let mut c: Carousel<(usize, usize)> = Carousel::default();
    c.rebuild(vec![
        vec![(0, 0), (0, 1), (0, 2)],
        vec![(1, 0), (1, 1), (1, 2), (1, 3)],
    ]);
    let out = c.update(DT);
    assert_eq!(out.len(), 7);
    let ids: Vec<(usize, usize)> = out.records.iter().map(|r| (r.row, r.index)).collect();
    assert_eq!(
        ids,
        vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (1, 3)]
    );
    for rec in &out.records {
        assert_eq!(rec.item, (rec.row, rec.index));
    }
}

/// it should stack rows downward with increasing index
#[test]
fn rows_stack_downward() {
    let mut c: Carousel<usize> = Carousel::default();
    c.rebuild(vec![vec![0], vec![1], vec![2]]);
    let spacing = c.config().row_spacing;
    let out = c.update(DT);
    for rec in &out.records {
        approx(pos(rec).1, -(rec.row as f32) * spacing, 1e-5);
    }
}

/// it should reproduce the same transform set after a full revolution of scroll
#[test]
fn full_revolution_wraps_consistently() {
    let n = 7usize;
    let mut base = one_row(n);
    base.configure(&no_snap());
    let mut wrapped = one_row(n);
    wrapped.configure(&no_snap());

    let s = base.arc_length_per_item();
    base.scroll_by(0, 0.3);
    wrapped.scroll_by(0, 0.3 + n as f32 * s);

    let a = base.update(DT).clone();
    let b = wrapped.update(DT).clone();
    assert_eq!(a.len(), b.len());
    for (ra, rb) in a.records.iter().zip(b.records.iter()) {
        assert_eq!(ra.visible, rb.visible, "index {}", ra.index);
        if !ra.visible {
            continue;
        }
        let (pa, pb) = (ra.position.unwrap(), rb.position.unwrap());
        approx(pa.x, pb.x, 1e-3);
        approx(pa.z, pb.z, 1e-3);
        approx(ra.scale.unwrap(), rb.scale.unwrap(), 1e-3);
        let (qa, qb) = (ra.rotation.unwrap(), rb.rotation.unwrap());
        approx(qa.yaw, qb.yaw, 1e-2);
        approx(qa.pitch, qb.pitch, 1e-2);
    }
}

/// it should cull exactly at halfFOV plus the fixed 0.20 rad margin
#[test]
fn visibility_boundary_is_half_fov_plus_margin() {
    let threshold = CarouselConfig::default().half_fov_rad() + 0.20;
    let step = CarouselConfig::default().effective_step();

    // Place item 1 of a 3-item row at a chosen theta by back-solving the
    // scroll position, then tick with dt = 0 so nothing moves.
    let theta_of = |theta: f32| {
        let mut c = one_row(3);
        c.configure(&no_snap());
        let s = c.arc_length_per_item();
        let u = 1.0 - theta / step;
        c.scroll_by(0, u * s);
        let out = c.update(0.0);
        out.records[1].visible
    };

    assert!(theta_of(threshold - 0.01), "just inside must be visible");
    assert!(!theta_of(threshold + 0.01), "just outside must be culled");
}

/// it should enlarge and pull forward the hovered item while scrolling
#[test]
fn hover_emphasis_applies_while_scrolling() {
    let mut c = one_row(5);
    c.hover(0, 1);
    let out = c.update(DT);

    // Items 1 and 4 sit at mirrored theta, so any difference is the hover.
    let hovered = &out.records[1];
    let plain = &out.records[4];
    assert!(hovered.scale.unwrap() > plain.scale.unwrap());
    assert!(pos(hovered).2 < pos(plain).2, "hover must move closer");
}

/// it should suppress hover emphasis entirely while an item is selected
#[test]
fn hover_is_inert_in_selected_mode() {
    let mut c = one_row(5);
    c.select(0, 0);
    c.hover(0, 1);
    let out = c.update(DT);

    let hovered = &out.records[1];
    let plain = &out.records[4];
    approx(hovered.scale.unwrap(), plain.scale.unwrap(), 1e-6);
    approx(pos(hovered).2, pos(plain).2, 1e-6);
}

/// it should converge the selected item to the select scale and the pulled
/// near-left position, and restore scrolling behavior after deselect
#[test]
fn select_converges_and_deselect_restores() {
    let cfg = CarouselConfig::default();
    let mut c = one_row(5);
    c.select(0, 0);
    for _ in 0..600 {
        c.update(DT);
    }
    let out = c.update(DT).clone();
    let sel = &out.records[0];
    approx(sel.scale.unwrap(), cfg.select_scale, 1e-2);
    let (x, _, z) = pos(sel);
    approx(x, -cfg.radius * 0.35, 1e-3);
    approx(z, -cfg.select_z_closer, 1e-3);

    c.deselect();
    for _ in 0..600 {
        c.update(DT);
    }
    let out = c.update(DT).clone();
    let back = &out.records[0];
    approx(back.scale.unwrap(), cfg.base_scale, 1e-2);
    let (x, _, z) = pos(back);
    approx(x, 0.0, 1e-3);
    approx(z, 0.0, 1e-3);
}

/// it should settle yaw to -theta and pitch to the sinusoidal tilt, with
/// roll always zero
#[test]
fn rotation_settles_to_arc_angles() {
    let mut c = one_row(5);
    for _ in 0..600 {
        c.update(DT);
    }
    let out = c.update(DT).clone();
    let step = c.config().effective_step();

    let r1 = out.records[1].rotation.unwrap();
    approx(r1.yaw, (-step).to_degrees(), 0.5);
    approx(r1.pitch, (0.08 * step.sin()).to_degrees(), 0.5);
    assert_eq!(r1.roll, 0.0);

    let r0 = out.records[0].rotation.unwrap();
    approx(r0.yaw, 0.0, 1e-2);
    approx(r0.pitch, 0.0, 1e-2);
}

/// it should lean rows against the scroll direction, clamped at max_lean
#[test]
fn velocity_lean_is_clamped() {
    let patch = ConfigPatch {
        snap_enabled: Some(false),
        friction: Some(0.0),
        ..ConfigPatch::default()
    };

    let yaw_after_one_frame = |max_lean: f32| {
        let mut c = one_row(5);
        c.configure(&patch);
        c.configure(&ConfigPatch {
            max_lean: Some(max_lean),
            ..ConfigPatch::default()
        });
        // Fast leftward scroll: lean term is positive and saturates 0.35.
        c.set_scroll_velocity(0, -10.0);
        let out = c.update(DT);
        out.records[0].rotation.unwrap().yaw
    };

    let clamped = yaw_after_one_frame(0.35);
    let free = yaw_after_one_frame(10.0);
    assert!(clamped > 0.0, "lean must tilt with the motion: {clamped}");
    assert!(free > clamped, "unclamped lean must exceed the clamped one");
}
