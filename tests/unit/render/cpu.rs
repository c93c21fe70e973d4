use super::*;

use kurbo::Point;

fn small_sink() -> CpuSink {
    CpuSink::new(Canvas {
        width: 32,
        height: 32,
    })
    .unwrap()
}

fn disc(color: Rgb8) -> DrawCommand {
    DrawCommand::Circle {
        center: Point::new(16.0, 16.0),
        radius: 10.0,
        color,
        width: 1.0,
        filled: true,
    }
}

#[test]
fn solid_clear_fills_every_pixel() {
    let mut sink = small_sink();
    sink.begin_frame(Clear::Solid(Rgb8::new(200, 10, 20))).unwrap();
    sink.present().unwrap();

    let frame = sink.snapshot();
    assert_eq!(frame.pixel(0, 0), Some([200, 10, 20, 255]));
    assert_eq!(frame.pixel(31, 31), Some([200, 10, 20, 255]));
    assert_eq!(frame.pixel(32, 0), None);
}

#[test]
fn filled_circle_covers_its_center() {
    let mut sink = small_sink();
    sink.begin_frame(Clear::Solid(Rgb8::BLACK)).unwrap();
    sink.draw(&disc(Rgb8::WHITE)).unwrap();
    sink.present().unwrap();

    let frame = sink.snapshot();
    assert_eq!(frame.pixel(16, 16), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 255]));
}

#[test]
fn fade_clear_keeps_a_dimmed_trail() {
    let mut sink = small_sink();
    sink.begin_frame(Clear::Solid(Rgb8::BLACK)).unwrap();
    sink.draw(&disc(Rgb8::WHITE)).unwrap();
    sink.present().unwrap();

    sink.begin_frame(Clear::Fade { alpha: 128 }).unwrap();
    sink.present().unwrap();

    let px = sink.snapshot().pixel(16, 16).unwrap();
    assert_eq!(px, [127, 127, 127, 255]);
    assert_eq!(sink.frames_presented(), 2);
}

#[test]
fn draw_outside_frame_is_an_error() {
    let mut sink = small_sink();
    assert!(sink.draw(&disc(Rgb8::WHITE)).is_err());
    assert!(sink.present().is_err());
}

#[test]
fn oversized_canvas_is_rejected() {
    let err = CpuSink::new(Canvas {
        width: 70_000,
        height: 10,
    })
    .unwrap_err();
    assert!(err.to_string().starts_with("render error:"));
}

#[test]
fn output_dir_receives_numbered_pngs() {
    let dir = std::env::temp_dir().join(format!("fog-projector-cpu-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let mut sink = small_sink().with_output_dir(&dir);
    for _ in 0..2 {
        sink.begin_frame(Clear::Solid(Rgb8::BLACK)).unwrap();
        sink.present().unwrap();
    }

    assert!(dir.join("frame_00000.png").is_file());
    assert!(dir.join("frame_00001.png").is_file());
    let _ = std::fs::remove_dir_all(&dir);
}
