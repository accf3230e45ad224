use anyhow::Result;

use drillboard_diagram::coords::Surface;
use drillboard_diagram::diagram::ColorTag;
use drillboard_diagram::editor::{DiagramEditor, Mode};
use drillboard_diagram::input::{PointerEvent, PointerPhase};
use drillboard_diagram::logging::init_logging;
use drillboard_diagram::render::render_diagram;
use drillboard_diagram::scene::DrawCmd;

/// Scripted authoring session: draws a passing pattern, places cones,
/// undoes a stray one, then replays the result at two surface sizes and
/// prints the serialized record a drill store would receive.
fn main() -> Result<()> {
    init_logging(None);

    let canvas = Surface::new(340.0, 200.0);
    let mut editor = DiagramEditor::new();

    // A run from the left third to the goal circle.
    editor.apply_pointer(PointerEvent::new(PointerPhase::Start, 40.0, 160.0), canvas);
    for step in 1..=30 {
        let t = step as f32 / 30.0;
        let x = 40.0 + 240.0 * t;
        let y = 160.0 - 120.0 * t + 30.0 * (t * 6.0).sin();
        editor.apply_pointer(PointerEvent::new(PointerPhase::Move, x, y), canvas);
    }
    editor.apply_pointer(PointerEvent::new(PointerPhase::End, 280.0, 40.0), canvas);

    // Cones marking the cut.
    editor.set_mode(Mode::Marker);
    editor.set_color(ColorTag::Red);
    editor.apply_pointer(PointerEvent::new(PointerPhase::Tap, 120.0, 100.0), canvas);
    editor.set_color(ColorTag::Blue);
    editor.apply_pointer(PointerEvent::new(PointerPhase::Tap, 220.0, 70.0), canvas);
    editor.set_color(ColorTag::Yellow);
    editor.apply_pointer(PointerEvent::new(PointerPhase::Tap, 310.0, 190.0), canvas);

    // That last cone was a misplacement.
    editor.undo();
    log::info!(
        "session captured: {} entities",
        editor.diagram().entity_count()
    );

    println!("── authoring session ─────────────────────────────");
    summarize("editor canvas 340x200", &editor, canvas);
    summarize("list thumbnail 120x80", &editor, Surface::new(120.0, 80.0));

    let saved = editor.take_diagram();
    println!("── saved drill record ────────────────────────────");
    println!("{}", serde_json::to_string_pretty(&saved)?);

    Ok(())
}

fn summarize(label: &str, editor: &DiagramEditor, surface: Surface) {
    let list = render_diagram(editor.diagram(), surface);
    println!("{label}: {} primitives", list.len());
    for cmd in list.items() {
        match cmd {
            DrawCmd::Polyline(line) => {
                let first = line.points.first().copied().unwrap_or_default();
                let last = line.points.last().copied().unwrap_or_default();
                println!(
                    "  polyline  {} pts  width {:.1}  ({:.1},{:.1}) → ({:.1},{:.1})",
                    line.points.len(),
                    line.width,
                    first.x,
                    first.y,
                    last.x,
                    last.y
                );
            }
            DrawCmd::Dot(dot) => {
                println!(
                    "  dot       r {:.1}  at ({:.1},{:.1})",
                    dot.radius, dot.center.x, dot.center.y
                );
            }
            DrawCmd::ConeGlyph(g) => {
                println!(
                    "  cone      half {:.1}  at ({:.1},{:.1})",
                    g.half_size, g.center.x, g.center.y
                );
            }
        }
    }
}
