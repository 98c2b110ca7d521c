use super::*;

#[test]
fn three_lines_center_in_reference_canvas() {
    let p = layout_text_block(3, 20.0, 480.0, 800.0, 40.0, Alignment::Center, 0.0);
    assert_eq!(p.y_start, 370.0);
    assert_eq!(p.line_y(0), 370.0);
    assert_eq!(p.line_y(2), 410.0);
}

#[test]
fn alignment_anchors() {
    let left = layout_text_block(1, 20.0, 480.0, 800.0, 40.0, Alignment::Left, 0.0);
    assert_eq!((left.x, left.anchor), (40.0, TextAnchor::Left));

    let right = layout_text_block(1, 20.0, 480.0, 800.0, 40.0, Alignment::Right, 0.0);
    assert_eq!((right.x, right.anchor), (440.0, TextAnchor::Right));

    let center = layout_text_block(1, 20.0, 480.0, 800.0, 40.0, Alignment::Center, 0.0);
    assert_eq!((center.x, center.anchor), (240.0, TextAnchor::Center));
}

#[test]
fn overflowing_block_starts_at_padding() {
    let p = layout_text_block(100, 45.0, 480.0, 800.0, 40.0, Alignment::Left, 0.0);
    assert_eq!(p.y_start, 40.0);
    assert!(p.line_y(99) > 800.0);
}

#[test]
fn footer_reservation_shifts_block_up() {
    let reserved = footer_reserved_height(16, true);
    assert_eq!(reserved, 48.0);
    assert_eq!(footer_reserved_height(16, false), 0.0);

    let p = layout_text_block(3, 20.0, 480.0, 800.0, 40.0, Alignment::Center, reserved);
    assert_eq!(p.y_start, 346.0);
}

#[test]
fn footer_sits_above_bottom_padding() {
    let o = footer_origin(480.0, 800.0, 40.0);
    assert_eq!(o, Point::new(240.0, 776.0));
}

#[test]
fn line_height_rounds() {
    assert_eq!(line_height_px(28, 1.6), 45.0);
    assert_eq!(line_height_px(20, 1.6), 32.0);
}
