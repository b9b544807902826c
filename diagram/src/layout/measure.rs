use crate::symbol::SymbolKind;

/// Width of one displayed character.
pub const CHAR_WIDTH: i32 = 6;
pub const MIN_WIDTH: i32 = 80;

/// Height of boxes with a header and two lines of text.
pub const FULL_HEIGHT: i32 = 46;
/// Height of boxes with three short lines.
pub const MID_HEIGHT: i32 = 31;
/// Height of boxes with two short lines.
pub const SMALL_HEIGHT: i32 = 26;

const NAME_OFFSET: i32 = 20;
const FIELD_OFFSET: i32 = 10;

fn text_width(offset: i32, text: &str) -> i32 {
    let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
    offset.saturating_add(CHAR_WIDTH.saturating_mul(chars))
}

fn optional_width(offset: i32, text: Option<&str>) -> i32 {
    text.map_or(0, |text| text_width(offset, text))
}

fn box_width(fields: impl IntoIterator<Item = i32>) -> i32 {
    fields.into_iter().fold(MIN_WIDTH, i32::max)
}

/// Width of a box: the widest of the texts it displays, but at least [`MIN_WIDTH`].
pub fn width(kind: &SymbolKind) -> i32 {
    match kind {
        SymbolKind::Schema | SymbolKind::Loop => MIN_WIDTH,
        SymbolKind::Element(element) => box_width([
            text_width(NAME_OFFSET, &element.name),
            optional_width(FIELD_OFFSET, element.namespace.as_deref()),
            optional_width(FIELD_OFFSET, element.type_string.as_deref()),
            optional_width(FIELD_OFFSET, element.cardinality.as_deref()),
        ]),
        SymbolKind::Attribute(attribute) => box_width([
            text_width(NAME_OFFSET, &attribute.name),
            optional_width(FIELD_OFFSET, attribute.namespace.as_deref()),
            optional_width(FIELD_OFFSET, attribute.type_string.as_deref()),
            optional_width(FIELD_OFFSET, attribute.constraint.as_deref()),
        ]),
        SymbolKind::Sequence(compositor)
        | SymbolKind::Choice(compositor)
        | SymbolKind::All(compositor) => box_width([optional_width(
            FIELD_OFFSET,
            compositor.cardinality.as_deref(),
        )]),
        SymbolKind::Any(wildcard) | SymbolKind::AnyAttribute(wildcard) => box_width([
            text_width(FIELD_OFFSET, &wildcard.namespace),
            text_width(FIELD_OFFSET, &format!("process: {}", wildcard.process_contents)),
            optional_width(FIELD_OFFSET, wildcard.cardinality.as_deref()),
        ]),
        SymbolKind::Key(constraint)
        | SymbolKind::Keyref(constraint)
        | SymbolKind::Unique(constraint) => box_width([
            text_width(NAME_OFFSET, &constraint.name),
            optional_width(FIELD_OFFSET, constraint.namespace.as_deref()),
            optional_width(
                FIELD_OFFSET,
                constraint.refer.as_ref().map(|r| format!("refer: {r}")).as_deref(),
            ),
        ]),
        SymbolKind::Selector(path) | SymbolKind::Field(path) => {
            box_width([text_width(FIELD_OFFSET, &path.xpath)])
        }
    }
}

pub fn height(kind: &SymbolKind) -> i32 {
    match kind {
        SymbolKind::Sequence(_) | SymbolKind::Choice(_) | SymbolKind::All(_) | SymbolKind::Loop => {
            SMALL_HEIGHT
        }
        SymbolKind::Selector(_) | SymbolKind::Field(_) => MID_HEIGHT,
        _ => FULL_HEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{ElementSymbol, XPathSymbol};

    #[test]
    fn short_texts_get_the_minimum_width() {
        let element = SymbolKind::Element(ElementSymbol {
            name: "a".into(),
            ..ElementSymbol::default()
        });
        assert_eq!(width(&element), MIN_WIDTH);
        assert_eq!(width(&SymbolKind::Loop), MIN_WIDTH);
    }

    #[test]
    fn widest_field_determines_the_width() {
        let element = SymbolKind::Element(ElementSymbol {
            name: "purchaseOrder".into(),                         // 20 + 13 * 6 = 98
            type_string: Some("type: PurchaseOrderType".into()), // 10 + 23 * 6 = 148
            ..ElementSymbol::default()
        });
        assert_eq!(width(&element), 148);
    }

    #[test]
    fn text_width_saturates() {
        assert_eq!(text_width(i32::MAX - 5, "ab"), i32::MAX);
        assert_eq!(text_width(NAME_OFFSET, "ab"), 32);
    }

    #[test]
    fn heights_come_in_three_tiers() {
        let field = SymbolKind::Field(XPathSymbol { xpath: "@id".into() });
        assert_eq!(height(&field), MID_HEIGHT);
        assert_eq!(height(&SymbolKind::Loop), SMALL_HEIGHT);
        assert_eq!(height(&SymbolKind::Schema), FULL_HEIGHT);
    }
}
