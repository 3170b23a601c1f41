use super::*;

#[test]
fn test_node() {
    let mut node: Node<u32> = Node::new(10);
    assert_eq!(node.is_red(), true);
    assert_eq!(node.left.is_none(), true);
    assert_eq!(node.right.is_none(), true);
    assert_eq!(node.parent.is_none(), true);
    assert_eq!(node.key, 10);

    node.set_black();
    assert_eq!(node.is_red(), false);
    node.set_red();
    assert_eq!(node.is_red(), true);

    let (a, b) = (NodeId::from_index(0), NodeId::from_index(1));
    node.set_child(Side::Left, Some(a));
    node.set_child(Side::Right, Some(b));
    assert_eq!(node.child(Side::Left), Some(a));
    assert_eq!(node.child(Side::Right), Some(b));
    assert_eq!(node.child(Side::Left.opposite()), Some(b));
    node.set_child(Side::Right, None);
    assert_eq!(node.right, None);
}

#[test]
fn test_node_id() {
    assert_eq!(
        std::mem::size_of::<NodeId>(),
        std::mem::size_of::<Option<NodeId>>()
    );
    for index in [0, 1, 1000, usize::MAX - 1].iter() {
        assert_eq!(NodeId::from_index(*index).to_index(), *index);
    }
    assert_eq!(NodeId::from_index(7).to_string(), "#7");
}

#[test]
#[should_panic(expected = "NodeId::from_index(): index overflow")]
fn test_node_id_overflow() {
    NodeId::from_index(usize::MAX);
}

#[test]
fn test_color_of() {
    let mut arena: Arena<Node<u32>> = Arena::new();
    let red = arena.alloc(Node::new(1));
    let black = arena.alloc(Node::new(2));
    arena.get_mut(black).set_black();

    assert_eq!(color_of(&arena, None), Color::Black);
    assert_eq!(color_of(&arena, Some(red)), Color::Red);
    assert_eq!(color_of(&arena, Some(black)), Color::Black);
    assert_eq!(Color::Red.to_string(), "R");
    assert_eq!(Color::Black.to_string(), "B");
}

#[test]
fn test_node_ref() {
    let mut arena: Arena<Node<u32>> = Arena::new();
    let root = arena.alloc(Node::new(20));
    let left = arena.alloc(Node::new(10));
    arena.get_mut(root).set_black();
    arena.get_mut(root).left = Some(left);
    arena.get_mut(left).parent = Some(root);

    let nref = NodeRef {
        arena: &arena,
        id: root,
    };
    assert_eq!(*nref.key(), 20);
    assert_eq!(nref.is_black(), true);
    assert_eq!(nref.is_root(), true);
    assert_eq!(nref.is_left_child(), false);
    assert!(nref.right().is_none());
    assert!(nref.parent().is_none());

    let lref = nref.left().unwrap();
    assert_eq!(lref.id(), left);
    assert_eq!(*lref.key(), 10);
    assert_eq!(lref.is_red(), true);
    assert_eq!(lref.is_left_child(), true);
    assert_eq!(lref.parent().map(|p| p.id()), Some(root));
    assert_eq!(format!("{:?}", lref), "<R:10>");
}
