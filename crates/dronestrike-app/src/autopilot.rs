//! Scripted player for headless sessions: picks a point to fire at.

use dronestrike_core::state::GameStateSnapshot;
use dronestrike_core::types::Position;

/// Center of the drone nearest the turret, or `None` when the sky is empty.
pub fn choose_target(snapshot: &GameStateSnapshot) -> Option<Position> {
    let turret = snapshot.turret;
    snapshot
        .drones
        .iter()
        .map(|d| Position::new(d.position.x + d.width / 2.0, d.position.y + d.height / 2.0))
        .min_by(|a, b| turret.distance_to(a).total_cmp(&turret.distance_to(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dronestrike_core::commands::PlayerCommand;
    use dronestrike_sim::engine::{SimConfig, SimulationEngine};

    #[test]
    fn test_no_target_without_drones() {
        let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
        assert_eq!(choose_target(&engine.tick()), None);
    }

    #[test]
    fn test_autopilot_scores_hits() {
        let mut engine = SimulationEngine::new(SimConfig {
            frame_ms: 100.0,
            ..Default::default()
        })
        .unwrap();
        engine.queue_command(PlayerCommand::Start);

        let mut snap = engine.tick();
        for _ in 0..400 {
            if let Some(target) = choose_target(&snap) {
                engine.queue_command(PlayerCommand::Fire {
                    x: target.x,
                    y: target.y,
                });
            }
            snap = engine.tick();
        }
        assert!(snap.stats.hits > 0);
        assert_eq!(snap.stats.misses, 0, "aiming at centers never misses");
    }
}
