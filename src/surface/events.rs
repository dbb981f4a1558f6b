//! Input events a surface consumes

/// Which pointer gesture ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    MouseUp,
    TouchEnd,
}

/// A pointer release in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub fn mouse_up(client_x: f64, client_y: f64) -> Self {
        Self { kind: PointerKind::MouseUp, client_x, client_y }
    }

    pub fn touch_end(client_x: f64, client_y: f64) -> Self {
        Self { kind: PointerKind::TouchEnd, client_x, client_y }
    }
}

/// A wheel scroll as reported by the host.
///
/// Hosts report either a `wheel_delta` (multiples of 120, positive = up) or
/// a `detail` (multiples of 3, positive = down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelEvent {
    pub wheel_delta: Option<f64>,
    pub detail: Option<f64>,
    default_prevented: bool,
}

impl WheelEvent {
    pub fn from_wheel_delta(wheel_delta: f64) -> Self {
        Self { wheel_delta: Some(wheel_delta), ..Self::default() }
    }

    pub fn from_detail(detail: f64) -> Self {
        Self { detail: Some(detail), ..Self::default() }
    }

    /// Notches scrolled, positive when scrolling up; 0 when nothing usable was reported
    pub fn normalized_delta(&self) -> f64 {
        let usable = |v: &f64| *v != 0.0 && !v.is_nan();
        if let Some(delta) = self.wheel_delta.filter(usable) {
            delta / 120.0
        } else if let Some(detail) = self.detail.filter(usable) {
            -detail / 3.0
        } else {
            0.0
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_delta_is_scaled() {
        assert_eq!(WheelEvent::from_wheel_delta(240.0).normalized_delta(), 2.0);
        assert_eq!(WheelEvent::from_wheel_delta(-120.0).normalized_delta(), -1.0);
    }

    #[test]
    fn detail_is_scaled_and_inverted() {
        assert_eq!(WheelEvent::from_detail(3.0).normalized_delta(), -1.0);
        assert_eq!(WheelEvent::from_detail(-6.0).normalized_delta(), 2.0);
    }

    #[test]
    fn zero_wheel_delta_falls_through_to_detail() {
        let event = WheelEvent { wheel_delta: Some(0.0), detail: Some(-3.0), ..WheelEvent::default() };
        assert_eq!(event.normalized_delta(), 1.0);
        assert_eq!(WheelEvent::default().normalized_delta(), 0.0);
    }
}
