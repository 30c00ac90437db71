//! Feder-Integrator für die Settle-Animation.
//!
//! Expliziter, tick-getriebener Ersatz für eine Plattform-Animations-API:
//! ein gedämpftes Feder-Masse-System zweiter Ordnung, das pro Frame mit
//! `tick(dt)` fortgeschrieben wird. Mit den Standard-Parametern ist das
//! System stark überdämpft und erreicht sein Ziel ohne Überschwingen.

/// Parameter des Feder-Systems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub mass: f32,
    pub stiffness: f32,
    pub damping: f32,
    /// Anfangsgeschwindigkeit, beim Start in Richtung Ziel signiert.
    pub initial_velocity: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            mass: Spring::MASS,
            stiffness: Spring::STIFFNESS,
            damping: Spring::DAMPING,
            initial_velocity: Spring::INITIAL_VELOCITY,
        }
    }
}

/// Gedämpfte Feder, die eine skalare Position auf ein Ziel zubewegt.
#[derive(Debug, Clone)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    params: SpringParams,
    settled: bool,
}

impl Spring {
    /// Masse des Feder-Systems.
    pub const MASS: f32 = 1.0;
    /// Federkonstante.
    pub const STIFFNESS: f32 = 100.0;
    /// Dämpfungskonstante (ζ = 5 bei Standard-Masse/-Steifigkeit).
    pub const DAMPING: f32 = 100.0;
    /// Anfangsgeschwindigkeit beim Settle-Start.
    pub const INITIAL_VELOCITY: f32 = 10.0;

    /// Positions-Epsilon, unterhalb dessen auf das Ziel gerastet wird.
    const REST_DISTANCE: f32 = 0.5;
    /// Geschwindigkeits-Epsilon für den Ruhezustand.
    const REST_VELOCITY: f32 = 0.5;
    /// Maximale Substep-Länge. Beschränkt `damping/mass * dt` deutlich
    /// unter 1, sonst flippt die explizite Integration das Vorzeichen
    /// der Geschwindigkeit pro Schritt.
    const MAX_SUBSTEP_SECS: f32 = 0.004;
    /// Obergrenze pro Tick: Ein einzelner Ruckler-Frame darf den
    /// Integrator nicht beliebig weit springen lassen.
    const MAX_TICK_SECS: f32 = 0.1;

    /// Startet ein Settle von `current` in Richtung `target`.
    /// Bei Distanz Null startet die Feder ohne Geschwindigkeits-Kick.
    pub fn settle_to(current: f32, target: f32, params: SpringParams) -> Self {
        let direction = if target == current {
            0.0
        } else {
            (target - current).signum()
        };
        Self {
            position: current,
            velocity: params.initial_velocity * direction,
            target,
            params,
            settled: false,
        }
    }

    /// Richtet eine laufende Feder auf ein neues Ziel aus.
    /// Position und Geschwindigkeit laufen vom aktuellen Wert weiter.
    pub fn retarget(&mut self, new_target: f32) {
        self.target = new_target;
        self.settled = false;
    }

    /// Schreibt die Feder um `dt` Sekunden fort und gibt die neue Position zurück.
    ///
    /// Semi-implizites Euler-Verfahren in Substeps; rastet exakt auf das
    /// Ziel, sobald Abstand und Geschwindigkeit unter den Epsilons liegen.
    pub fn tick(&mut self, dt: f32) -> f32 {
        if self.settled {
            return self.position;
        }

        let dt = dt.clamp(0.0, Self::MAX_TICK_SECS);
        let steps = (dt / Self::MAX_SUBSTEP_SECS).ceil().max(1.0);
        let step_dt = dt / steps;

        for _ in 0..steps as usize {
            let accel = (self.params.stiffness * (self.target - self.position)
                - self.params.damping * self.velocity)
                / self.params.mass;
            self.velocity += accel * step_dt;
            self.position += self.velocity * step_dt;
        }

        if (self.target - self.position).abs() < Self::REST_DISTANCE
            && self.velocity.abs() < Self::REST_VELOCITY
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }

        self.position
    }

    /// Aktuelle animierte Position.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Ziel der laufenden Animation.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Ob die Feder ihr Ziel erreicht hat und eingerastet ist.
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FRAME: f32 = 1.0 / 60.0;

    fn run_to_rest(spring: &mut Spring, max_frames: usize) -> usize {
        for frame in 0..max_frames {
            spring.tick(FRAME);
            if spring.is_settled() {
                return frame;
            }
        }
        panic!("Feder hat nach {max_frames} Frames nicht eingerastet");
    }

    #[test]
    fn test_spring_settles_exactly_on_target() {
        let mut spring = Spring::settle_to(0.0, -700.0, SpringParams::default());
        run_to_rest(&mut spring, 2000);
        assert_relative_eq!(spring.position(), -700.0);
    }

    #[test]
    fn test_spring_does_not_overshoot() {
        let mut spring = Spring::settle_to(0.0, -700.0, SpringParams::default());
        for _ in 0..2000 {
            let position = spring.tick(FRAME);
            assert!(
                position >= -700.0 - 1e-3,
                "Feder hat das Ziel überschossen: {position}"
            );
            if spring.is_settled() {
                break;
            }
        }
        assert!(spring.is_settled());
    }

    #[test]
    fn test_spring_moves_toward_target_monotonically() {
        let mut spring = Spring::settle_to(0.0, -700.0, SpringParams::default());
        let mut previous = spring.position();
        for _ in 0..600 {
            let position = spring.tick(FRAME);
            assert!(position <= previous + 1e-3, "Feder lief rückwärts");
            previous = position;
        }
    }

    #[test]
    fn test_retarget_continues_from_current_position() {
        let mut spring = Spring::settle_to(0.0, -700.0, SpringParams::default());
        for _ in 0..30 {
            spring.tick(FRAME);
        }
        let mid_position = spring.position();
        assert!(mid_position < 0.0 && mid_position > -700.0);

        spring.retarget(0.0);
        // Kein Sprung: Der nächste Tick startet bei der animierten Position
        let after = spring.tick(FRAME);
        assert!(
            (after - mid_position).abs() < 15.0,
            "Retarget darf keinen Positionssprung erzeugen"
        );
        assert_relative_eq!(spring.target(), 0.0);
    }

    #[test]
    fn test_oversized_dt_is_clamped() {
        let mut spring = Spring::settle_to(0.0, -700.0, SpringParams::default());
        // Ein 10-Sekunden-Ruckler darf den Integrator nicht explodieren lassen
        let position = spring.tick(10.0);
        assert!(position.is_finite());
        assert!((-700.0..=0.0).contains(&position));
    }

    #[test]
    fn test_settle_at_target_starts_inert() {
        // Settle auf die bereits erreichte Position: kein Kick weg vom Ziel
        let mut spring = Spring::settle_to(-700.0, -700.0, SpringParams::default());
        let position = spring.tick(FRAME);
        assert_relative_eq!(position, -700.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_settled_spring_holds_position() {
        let mut spring = Spring::settle_to(0.0, -700.0, SpringParams::default());
        run_to_rest(&mut spring, 2000);
        let held = spring.tick(FRAME);
        assert_relative_eq!(held, -700.0);
    }
}
