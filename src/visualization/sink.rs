//! The rendering sink boundary
//!
//! The engine never draws; everything visual leaves through [`RenderSink`],
//! which an embedding viewer implements. Shipped implementations cover the
//! non-graphical cases: discard ([`NullSink`]), capture for assertions
//! ([`RecordingSink`]), and structured logging ([`LogSink`], what the
//! binary uses).

use log::debug;

use crate::simulation::states::NVec3;

/// Display color keyed off the sign of a charge density
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeColor {
    Negative,
    Positive,
    Neutral,
}

impl ChargeColor {
    pub fn from_density(charge_density: f64) -> Self {
        if charge_density < 0.0 {
            ChargeColor::Negative
        } else if charge_density > 0.0 {
            ChargeColor::Positive
        } else {
            ChargeColor::Neutral
        }
    }
}

/// Abstract drawing surface consumed by the engine
///
/// Calls carry only the data a renderer needs (positions, directions,
/// scalars); nothing flows back into the physics.
pub trait RenderSink {
    /// A charge body, for scene display
    fn draw_sphere(&mut self, center: NVec3, radius: f64, color: ChargeColor);

    /// A completed streamline as an ordered polyline
    fn draw_curve(&mut self, points: &[NVec3], color: ChargeColor);

    /// A cone-like marker at `position` along `direction`
    /// The hints are display sizes, not physical quantities
    fn draw_directional_glyph(
        &mut self,
        position: NVec3,
        direction: NVec3,
        radius_hint: f64,
        length_hint: f64,
        color: ChargeColor,
    );
}

/// Discards every draw call
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn draw_sphere(&mut self, _center: NVec3, _radius: f64, _color: ChargeColor) {}
    fn draw_curve(&mut self, _points: &[NVec3], _color: ChargeColor) {}
    fn draw_directional_glyph(
        &mut self,
        _position: NVec3,
        _direction: NVec3,
        _radius_hint: f64,
        _length_hint: f64,
        _color: ChargeColor,
    ) {
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawEvent {
    Sphere {
        center: NVec3,
        radius: f64,
        color: ChargeColor,
    },
    Curve {
        points: Vec<NVec3>,
        color: ChargeColor,
    },
    Glyph {
        position: NVec3,
        direction: NVec3,
        radius_hint: f64,
        length_hint: f64,
        color: ChargeColor,
    },
}

/// Captures draw calls in order, for tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<DrawEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn curves(&self) -> impl Iterator<Item = &DrawEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, DrawEvent::Curve { .. }))
    }

    pub fn glyphs(&self) -> impl Iterator<Item = &DrawEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, DrawEvent::Glyph { .. }))
    }

    pub fn spheres(&self) -> impl Iterator<Item = &DrawEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, DrawEvent::Sphere { .. }))
    }
}

impl RenderSink for RecordingSink {
    fn draw_sphere(&mut self, center: NVec3, radius: f64, color: ChargeColor) {
        self.events.push(DrawEvent::Sphere {
            center,
            radius,
            color,
        });
    }

    fn draw_curve(&mut self, points: &[NVec3], color: ChargeColor) {
        self.events.push(DrawEvent::Curve {
            points: points.to_vec(),
            color,
        });
    }

    fn draw_directional_glyph(
        &mut self,
        position: NVec3,
        direction: NVec3,
        radius_hint: f64,
        length_hint: f64,
        color: ChargeColor,
    ) {
        self.events.push(DrawEvent::Glyph {
            position,
            direction,
            radius_hint,
            length_hint,
            color,
        });
    }
}

/// Logs every draw call at debug level; the binary's default sink
#[derive(Debug, Default)]
pub struct LogSink;

impl RenderSink for LogSink {
    fn draw_sphere(&mut self, center: NVec3, radius: f64, color: ChargeColor) {
        debug!(
            "sphere at ({:.3}, {:.3}, {:.3}) r={} {:?}",
            center.x, center.y, center.z, radius, color
        );
    }

    fn draw_curve(&mut self, points: &[NVec3], color: ChargeColor) {
        debug!("curve with {} points {:?}", points.len(), color);
    }

    fn draw_directional_glyph(
        &mut self,
        position: NVec3,
        direction: NVec3,
        radius_hint: f64,
        length_hint: f64,
        color: ChargeColor,
    ) {
        debug!(
            "glyph at ({:.3}, {:.3}, {:.3}) axis ({:.3}, {:.3}, {:.3}) r={:.4} l={:.4} {:?}",
            position.x,
            position.y,
            position.z,
            direction.x,
            direction.y,
            direction.z,
            radius_hint,
            length_hint,
            color
        );
    }
}
