use dt_xsd::SchemaModel;
use dt_xsd_diagram::layout::measure::{FULL_HEIGHT, MIN_WIDTH, SMALL_HEIGHT};
use dt_xsd_diagram::layout::{DEFAULT_ROOT_Y, DESCRIPTION_LINE_HEIGHT, ROOT_X, X_INDENT, Y_GAP};
use dt_xsd_diagram::{diagram, LayoutOptions, ResolveOptions, Tree};
use roxmltree::Document;

const SCHEMA: &str = r#"
    <xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
      <xs:element name="purchaseOrder" type="PurchaseOrderType"/>
      <xs:complexType name="PurchaseOrderType">
        <xs:sequence>
          <xs:element name="shipTo" type="xs:string">
            <xs:annotation>
              <xs:documentation>Where the goods are delivered to, including the full postal address.</xs:documentation>
            </xs:annotation>
          </xs:element>
          <xs:element name="billTo" type="xs:string"/>
          <xs:element name="comment" type="xs:string" minOccurs="0"/>
        </xs:sequence>
        <xs:attribute name="orderDate" type="xs:date"/>
      </xs:complexType>
    </xs:schema>"#;

fn laid_out(root: Option<&str>, start_y: Option<i32>) -> Tree {
    let doc = Document::parse(SCHEMA).unwrap();
    let model = SchemaModel::new(&doc);
    diagram(
        &model,
        &ResolveOptions {
            root: root.map(String::from),
            one_node_only: false,
        },
        &LayoutOptions { start_y },
    )
}

#[test]
fn places_the_purchase_order() {
    let tree = laid_out(Some("purchaseOrder"), None);
    let root = tree.root().unwrap();
    let order = tree.get(root).geometry;
    assert_eq!((order.x, order.y), (ROOT_X, DEFAULT_ROOT_Y));
    // "type: PurchaseOrderType" is the widest line
    assert_eq!(order.width, 10 + 6 * 23);
    assert_eq!(order.height, FULL_HEIGHT);

    let children = tree.children(root);
    let sequence = tree.get(children[0]).geometry;
    assert_eq!(sequence.x, order.right() + X_INDENT);
    assert_eq!(sequence.y, DEFAULT_ROOT_Y);
    assert_eq!(sequence.height, SMALL_HEIGHT);

    let members = tree.children(children[0]);
    let ship_to = tree.get(members[0]);
    let bill_to = tree.get(members[1]);
    let comment = tree.get(members[2]);
    assert_eq!(ship_to.geometry.x, sequence.right() + X_INDENT);
    assert_eq!(ship_to.geometry.y, DEFAULT_ROOT_Y);
    assert!(ship_to.description.len() > 1);
    assert_eq!(
        ship_to.additional_height,
        ship_to.description.len() as i32 * DESCRIPTION_LINE_HEIGHT
    );

    // the description of shipTo hangs below its row
    assert_eq!(
        bill_to.geometry.y,
        DEFAULT_ROOT_Y + FULL_HEIGHT + Y_GAP + ship_to.additional_height
    );
    assert_eq!(comment.geometry.y, bill_to.geometry.y + FULL_HEIGHT + Y_GAP);

    // the attribute follows the sequence subtree
    let order_date = tree.get(children[1]);
    assert_eq!(order_date.geometry.x, sequence.x);
    assert_eq!(order_date.geometry.y, comment.geometry.y + FULL_HEIGHT + Y_GAP);
}

#[test]
fn start_y_moves_only_the_root() {
    let tree = laid_out(Some("purchaseOrder"), Some(0));
    let root = tree.root().unwrap();
    assert_eq!(tree.get(root).geometry.y, 0);
    assert_eq!(tree.get(root).geometry.x, ROOT_X);

    let default = laid_out(Some("purchaseOrder"), None);
    for (moved, original) in tree.iter().zip(default.iter()) {
        assert_eq!(
            tree.get(moved).geometry.y + DEFAULT_ROOT_Y,
            default.get(original).geometry.y
        );
    }
}

#[test]
fn every_box_is_sized() {
    let tree = laid_out(None, None);
    for id in tree.iter() {
        let geometry = tree.get(id).geometry;
        assert!(geometry.width >= MIN_WIDTH, "{}", tree.path_code(id));
        assert!(geometry.height > 0);
    }
}

#[test]
fn wrapped_lines_fit_their_box() {
    let tree = laid_out(Some("purchaseOrder"), None);
    for id in tree.iter() {
        let symbol = tree.get(id);
        let columns = (f64::from(symbol.geometry.width) / 6.0).round() as usize;
        for line in &symbol.description {
            assert!(line.chars().count() <= columns, "{line:?}");
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let first = laid_out(None, None);
    let second = laid_out(None, None);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(first.get(a).geometry, second.get(b).geometry);
        assert_eq!(first.get(a).description, second.get(b).description);
    }
}
