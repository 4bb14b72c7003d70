use crate::event::{Signal, TextEvent};
use crate::geometry::{Alignment, Angle, Point, PositiveLength};
use crate::layer::LayerName;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Shared handle to a text element, as stored in a [`TextList`]
/// and captured by edit commands.
///
/// [`TextList`]: crate::entity::TextList
pub type TextRef = Rc<RefCell<Text>>;

/// A text label element of a symbol or footprint.
///
/// All mutation goes through the setters, which compare against the
/// current value, skip no-op assignments entirely and emit a
/// field-specific [`TextEvent`] on every actual change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    uuid: Uuid,
    layer: LayerName,
    text: String,
    position: Point,
    rotation: Angle,
    height: PositiveLength,
    align: Alignment,
    #[serde(skip)]
    on_edited: Signal<TextEvent>,
}

impl PartialEq for Text {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
            && self.layer == other.layer
            && self.text == other.text
            && self.position == other.position
            && self.rotation == other.rotation
            && self.height == other.height
            && self.align == other.align
    }
}

impl Text {
    /// Creates a new text element with a fresh identity
    pub fn new(
        layer: LayerName,
        text: impl Into<String>,
        position: Point,
        rotation: Angle,
        height: PositiveLength,
        align: Alignment,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            layer,
            text: text.into(),
            position,
            rotation,
            height,
            align,
            on_edited: Signal::new(),
        }
    }

    /// Creates a new shared text element
    pub fn new_ref(
        layer: LayerName,
        text: impl Into<String>,
        position: Point,
        rotation: Angle,
        height: PositiveLength,
        align: Alignment,
    ) -> TextRef {
        Rc::new(RefCell::new(Self::new(
            layer, text, position, rotation, height, align,
        )))
    }

    /// The edit-notification channel of this element
    pub fn on_edited(&self) -> &Signal<TextEvent> {
        &self.on_edited
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn layer(&self) -> &LayerName {
        &self.layer
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    pub fn height(&self) -> PositiveLength {
        self.height
    }

    pub fn align(&self) -> Alignment {
        self.align
    }

    /// Replaces the identity. Returns true if it actually changed.
    pub fn set_uuid(&mut self, uuid: Uuid) -> bool {
        if uuid == self.uuid {
            return false;
        }
        self.uuid = uuid;
        self.on_edited.emit(&TextEvent::UuidChanged);
        true
    }

    pub fn set_layer(&mut self, layer: LayerName) -> bool {
        if layer == self.layer {
            return false;
        }
        self.layer = layer;
        self.on_edited.emit(&TextEvent::LayerChanged);
        true
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        self.text = text;
        self.on_edited.emit(&TextEvent::TextChanged);
        true
    }

    pub fn set_position(&mut self, position: Point) -> bool {
        if position == self.position {
            return false;
        }
        self.position = position;
        self.on_edited.emit(&TextEvent::PositionChanged);
        true
    }

    pub fn set_rotation(&mut self, rotation: Angle) -> bool {
        if rotation == self.rotation {
            return false;
        }
        self.rotation = rotation;
        self.on_edited.emit(&TextEvent::RotationChanged);
        true
    }

    pub fn set_height(&mut self, height: PositiveLength) -> bool {
        if height == self.height {
            return false;
        }
        self.height = height;
        self.on_edited.emit(&TextEvent::HeightChanged);
        true
    }

    pub fn set_align(&mut self, align: Alignment) -> bool {
        if align == self.align {
            return false;
        }
        self.align = align;
        self.on_edited.emit(&TextEvent::AlignChanged);
        true
    }

    /// Assigns the full value state of `other`, going through the
    /// setters so that one notification fires per changed field,
    /// including an identity change. Returns true if anything changed.
    pub fn copy_from(&mut self, other: &Text) -> bool {
        let mut changed = self.set_uuid(other.uuid);
        changed |= self.set_layer(other.layer.clone());
        changed |= self.set_text(other.text.clone());
        changed |= self.set_position(other.position);
        changed |= self.set_rotation(other.rotation);
        changed |= self.set_height(other.height);
        changed |= self.set_align(other.align);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::TextEvent;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn create_text() -> Text {
        Text::new(
            LayerName::top_legend(),
            "REF",
            Point::from_mm(1.0, 2.0),
            Angle::ZERO,
            PositiveLength::from_mm(1.0).unwrap(),
            Alignment::default(),
        )
    }

    fn record_events(text: &Text) -> (Rc<RefCell<Vec<TextEvent>>>, crate::event::Subscription) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let sub = text.on_edited().subscribe(move |e| sink.borrow_mut().push(*e));
        (events, sub)
    }

    #[test]
    fn test_noop_setters_do_not_notify() {
        let mut text = create_text();
        let (events, _sub) = record_events(&text);

        assert!(!text.set_text("REF"));
        assert!(!text.set_position(Point::from_mm(1.0, 2.0)));
        assert!(!text.set_rotation(Angle::ZERO));
        assert!(!text.set_height(PositiveLength::from_mm(1.0).unwrap()));
        assert!(!text.set_align(Alignment::default()));
        assert!(!text.set_layer(LayerName::top_legend()));

        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_setters_emit_field_specific_events() {
        let mut text = create_text();
        let (events, _sub) = record_events(&text);

        assert!(text.set_text("VAL"));
        assert!(text.set_rotation(Angle::from_deg(90.0)));

        assert_eq!(
            *events.borrow(),
            vec![TextEvent::TextChanged, TextEvent::RotationChanged]
        );
    }

    #[test]
    fn test_copy_from_notifies_per_changed_field() {
        let mut text = create_text();
        let mut other = create_text();
        other.set_text("VAL");
        other.set_height(PositiveLength::from_mm(2.0).unwrap());

        let (events, _sub) = record_events(&text);
        assert!(text.copy_from(&other));

        // uuid differs as well (fresh identity per element)
        assert_eq!(
            *events.borrow(),
            vec![
                TextEvent::UuidChanged,
                TextEvent::TextChanged,
                TextEvent::HeightChanged,
            ]
        );
        assert_eq!(text, other);
        assert!(!text.copy_from(&other));
    }

    #[test]
    fn test_serde_roundtrip() {
        let text = create_text();
        let json = serde_json::to_string(&text).unwrap();
        let restored: Text = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, text);
    }
}
