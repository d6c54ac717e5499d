//! Hand-built game trees for exercising the searchers.

use std::cell::Cell;
use std::rc::Rc;

use super::tree::GameTree;
use crate::game::Player;

#[derive(Debug)]
pub(crate) enum Node {
    Leaf(f64),
    Branch(Vec<Rc<Node>>),
}

pub(crate) fn leaf(value: f64) -> Rc<Node> {
    Rc::new(Node::Leaf(value))
}

pub(crate) fn branch(children: Vec<Rc<Node>>) -> Rc<Node> {
    Rc::new(Node::Branch(children))
}

/// Branch whose children are all leaves.
pub(crate) fn leaves(values: &[f64]) -> Rc<Node> {
    branch(values.iter().copied().map(leaf).collect())
}

/// A position in a scripted tree. Players alternate by level; moves are child
/// indices. Every construction is tallied in `built`.
#[derive(Debug, Clone)]
pub(crate) struct Scripted {
    node: Rc<Node>,
    player: Player,
    built: Rc<Cell<u64>>,
}

impl Scripted {
    pub(crate) fn root(node: Rc<Node>, player: Player) -> Self {
        let built = Rc::new(Cell::new(1));
        Scripted { node, player, built }
    }

    pub(crate) fn built(&self) -> u64 {
        self.built.get()
    }
}

impl GameTree for Scripted {
    type Move = usize;

    fn successors(&self) -> Vec<(usize, Scripted)> {
        match &*self.node {
            Node::Leaf(_) => Vec::new(),
            Node::Branch(children) => children
                .iter()
                .enumerate()
                .map(|(index, child)| {
                    self.built.set(self.built.get() + 1);
                    let next = Scripted {
                        node: Rc::clone(child),
                        player: self.player.other(),
                        built: Rc::clone(&self.built),
                    };
                    (index, next)
                })
                .collect(),
        }
    }

    fn is_full(&self) -> bool {
        matches!(*self.node, Node::Leaf(_))
    }

    fn utility(&self) -> f64 {
        match *self.node {
            Node::Leaf(value) => value,
            Node::Branch(_) => f64::NAN,
        }
    }

    fn next_player(&self) -> Player {
        self.player
    }
}
