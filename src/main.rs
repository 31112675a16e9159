use glam::Vec2;
use sapling::{audio, CursorInput, NullAudio, Tree, TreeConfig, TreeEvent};

const DT: f32 = 1.0 / 60.0;
const MAX_TICKS: u32 = 1800;

/// Scripted cursor: wait for an apple, pull it off the tree, carry it to the
/// goal, drop it.
#[derive(Clone, Copy)]
enum Phase {
    WaitForApple,
    Pull { apple: usize },
    Carry { apple: usize },
    Settle { ticks_left: u32 },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut tree = Tree::new(TreeConfig::default());
    let mut sink = NullAudio;
    let mut phase = Phase::WaitForApple;

    for tick in 0..MAX_TICKS {
        let input = match phase {
            Phase::WaitForApple => {
                let target = tree
                    .apples()
                    .position(|apple| apple.is_active() && apple.is_attached());
                match target {
                    Some(index) => {
                        let position = tree.apple(index).unwrap().position();
                        phase = Phase::Pull { apple: index };
                        CursorInput::new(position, true)
                    }
                    None => CursorInput::new(Vec2::ZERO, false),
                }
            }
            Phase::Pull { apple } => {
                // Drag well past the attach radius, towards the goal.
                let held = tree.apple(apple).unwrap();
                let away = (tree.goal() - held.origin()).normalize_or_zero();
                CursorInput::new(held.origin() + away * 3.0, true)
            }
            Phase::Carry { apple } => {
                let held = tree.apple(apple).unwrap();
                let arrived = held.position().distance(tree.goal()) < 0.3;
                CursorInput::new(tree.goal(), !arrived)
            }
            Phase::Settle { ticks_left } => {
                if ticks_left == 0 {
                    break;
                }
                phase = Phase::Settle {
                    ticks_left: ticks_left - 1,
                };
                CursorInput::new(Vec2::ZERO, false)
            }
        };

        let events = tree.tick(DT, input);
        audio::route(&events, &mut sink);
        for &event in &events {
            log::info!("t={:.2}s {:?}", tick as f32 * DT, event);
            phase = match (phase, event) {
                (Phase::Pull { apple }, TreeEvent::AppleDetached { apple: detached })
                    if detached == apple =>
                {
                    Phase::Carry { apple }
                }
                (Phase::Carry { apple }, TreeEvent::AppleScored { apple: scored })
                    if scored == apple =>
                {
                    Phase::Settle { ticks_left: 60 }
                }
                (unchanged, _) => unchanged,
            };
        }
    }

    let effector = tree.trunk().chain().end_effector().unwrap_or(Vec2::ZERO);
    log::info!(
        "done: tree top at ({:.2}, {:.2}), {} apples in play",
        effector.x,
        effector.y,
        tree.apples().filter(|apple| apple.is_active()).count()
    );
}
