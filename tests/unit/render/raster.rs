use super::*;
use crate::model::request::{Alignment, BorderStyle};
use crate::render::recorder::{Op, Recorder};

fn request(text: &str) -> RenderRequest {
    RenderRequest {
        text: text.to_string(),
        font: FontSpec::regular("Literata", 20),
        ..RenderRequest::default()
    }
}

#[test]
fn paints_background_border_text_footer_in_order() {
    let mut req = request("hello world");
    req.border_style = BorderStyle::Simple;
    req.footer_text = Some("page one".to_string());
    let cfg = OutputConfig::default();
    let mut rec = Recorder::new(480, 800);

    render(&req, &cfg, &mut rec).unwrap();

    assert_eq!(
        rec.ops[0],
        Op::FillRect(Rect::new(0.0, 0.0, 480.0, 800.0), Rgba8::WHITE)
    );
    assert!(matches!(rec.ops[1], Op::StrokeRect(_, _)));

    let texts = rec.texts();
    assert_eq!(texts.len(), 2);
    let (body, body_font, body_origin, body_paint) = texts[0];
    assert_eq!(body, "hello world");
    assert_eq!(body_font.size_px, 20);
    // (800 - 48 footer - 32 line) / 2
    assert_eq!(body_origin, Point::new(240.0, 360.0));
    assert_eq!(body_paint.anchor, TextAnchor::Center);
    assert_eq!(body_paint.baseline, TextBaseline::Top);
    assert_eq!(body_paint.color, Rgba8::BLACK);

    let (footer, footer_font, footer_at, footer_paint) = texts[1];
    assert_eq!(footer, "page one");
    assert_eq!(footer_font.family, "Atkinson Hyperlegible");
    assert_eq!(footer_font.size_px, 16);
    assert_eq!(footer_at, Point::new(240.0, 776.0));
    assert_eq!(footer_paint.baseline, TextBaseline::Bottom);
    assert_eq!(footer_paint.color, Rgba8::gray(0x55));
    assert!(matches!(rec.ops.last(), Some(Op::Text { .. })));
}

#[test]
fn blank_text_renders_placeholder_and_skips_blank_lines() {
    let mut req = request("   ");
    req.alignment = Alignment::Left;
    let cfg = OutputConfig::default();
    let mut rec = Recorder::new(480, 800);

    render(&req, &cfg, &mut rec).unwrap();

    let texts = rec.texts();
    assert_eq!(texts.len(), 3);
    assert_eq!(texts[2].0, "— Albert Einstein");
    // four wrapped lines of 32 px: (800 - 128) / 2
    assert_eq!(texts[0].2, Point::new(40.0, 336.0));
    assert_eq!(texts[2].2, Point::new(40.0, 336.0 + 3.0 * 32.0));
}

#[test]
fn supersampling_scales_every_metric_and_keeps_wrap_font() {
    let mut req = request("one two three four five six seven eight nine ten eleven twelve");
    req.alignment = Alignment::Right;
    req.footer_text = Some("f".to_string());
    let cfg = OutputConfig {
        supersample_scale: 2,
        ..OutputConfig::default()
    };
    let mut rec = Recorder::new(960, 1600);

    render(&req, &cfg, &mut rec).unwrap();

    let texts = rec.texts();
    let (body_texts, footer) = texts.split_at(texts.len() - 1);
    for (_, font, origin, paint) in body_texts {
        assert_eq!(font.size_px, 40);
        assert_eq!(origin.x, 880.0);
        assert_eq!(paint.anchor, TextAnchor::Right);
        assert_eq!(rec.measured_fonts, vec![(*font).clone()]);
    }
    assert_eq!(footer[0].1.size_px, 32);
    assert_eq!(footer[0].2, Point::new(480.0, 1552.0));
}

#[test]
fn wrapped_lines_fit_scaled_max_width() {
    let req = request("aaaa bbbb cccc dddd eeee ffff gggg hhhh iiii jjjj kkkk llll mmmm");
    let cfg = OutputConfig::default();
    let mut rec = Recorder::new(480, 800);

    render(&req, &cfg, &mut rec).unwrap();

    for (text, font, _, _) in rec.texts() {
        let w = text.chars().count() as f32 * font.size_px as f32 * 0.5;
        assert!(w <= cfg.max_text_width());
    }
}

#[test]
fn surface_size_must_match_scaled_config() {
    let cfg = OutputConfig {
        supersample_scale: 2,
        ..OutputConfig::default()
    };
    let mut rec = Recorder::new(480, 800);
    let err = render(&request("x"), &cfg, &mut rec).unwrap_err();
    assert!(matches!(err, QuoteError::Validation(_)));
    assert!(rec.ops.is_empty());
}

#[test]
fn measurement_failure_propagates() {
    let mut rec = Recorder::new(480, 800);
    rec.fail_measure = true;
    let err = render(&request("x"), &OutputConfig::default(), &mut rec).unwrap_err();
    assert!(matches!(err, QuoteError::Measurement(_)));
}

#[test]
fn render_frame_returns_final_resolution() {
    let cfg = OutputConfig {
        supersample_scale: 3,
        ..OutputConfig::default()
    };
    let mut rec = Recorder::new(1440, 2400);
    let frame = render_frame(&request("hi"), &cfg, &mut rec).unwrap();
    assert_eq!((frame.width, frame.height), (480, 800));
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));

    let mut direct = Recorder::new(480, 800);
    let frame = render_frame(&request("hi"), &OutputConfig::default(), &mut direct).unwrap();
    assert_eq!((frame.width, frame.height), (480, 800));
}

#[test]
fn bmp_is_encoded_from_downsampled_frame() {
    let cfg = OutputConfig {
        supersample_scale: 2,
        ..OutputConfig::default()
    };
    let mut rec = Recorder::new(960, 1600);
    let bmp = render_bmp(&request("hi"), &cfg, &mut rec).unwrap();
    let dib_w = i32::from_le_bytes([bmp.bytes[18], bmp.bytes[19], bmp.bytes[20], bmp.bytes[21]]);
    let dib_h = i32::from_le_bytes([bmp.bytes[22], bmp.bytes[23], bmp.bytes[24], bmp.bytes[25]]);
    assert_eq!((dib_w, dib_h), (480, 800));
    assert_eq!(bmp.bytes.len(), 54 + 1440 * 800);

    // the raw supersampled readback is the wrong size for the requested output
    let raw = rec.read_rgba().unwrap();
    assert!(encode_bmp(&raw, cfg.width, cfg.height).is_err());
}

#[test]
fn supersampled_line_positions_match_direct_layout() {
    let text = "a\nb\nc\nd\ne\nf\ng\nh\ni\nj";
    let mut req = request(text);
    req.font = FontSpec::regular("Literata", 29);

    let mut direct = Recorder::new(480, 800);
    render(&req, &OutputConfig::default(), &mut direct).unwrap();
    let direct_ys: Vec<f64> = direct.texts().iter().map(|t| t.2.y).collect();
    assert_eq!(direct_ys.len(), 10);
    // round(29 * 1.6) = 46, (800 - 460) / 2 = 170
    assert_eq!(direct_ys[0], 170.0);
    assert_eq!(direct_ys[1], 216.0);

    let cfg = OutputConfig {
        supersample_scale: 2,
        ..OutputConfig::default()
    };
    let mut sup = Recorder::new(960, 1600);
    render(&req, &cfg, &mut sup).unwrap();
    let halved: Vec<f64> = sup.texts().iter().map(|t| t.2.y / 2.0).collect();
    assert_eq!(halved, direct_ys);
}

#[test]
fn huge_font_sizes_are_validation_errors() {
    let mut req = request("x");
    req.footer_text = Some("footer".to_string());
    let cfg = OutputConfig {
        footer_font_size: 2_000_000_000,
        ..OutputConfig::default()
    };
    let mut rec = Recorder::new(480, 800);
    let err = render(&req, &cfg, &mut rec).unwrap_err();
    assert!(matches!(err, QuoteError::Validation(_)));

    req.font.size_px = u32::MAX / 2;
    let mut rec = Recorder::new(960, 1600);
    let cfg = OutputConfig {
        supersample_scale: 2,
        ..OutputConfig::default()
    };
    let err = render(&req, &cfg, &mut rec).unwrap_err();
    assert!(matches!(err, QuoteError::Validation(_)));
    assert!(rec.ops.is_empty());
}
