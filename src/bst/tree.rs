use crate::bst::node::Node;
use crate::entry::KeyExtractor;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn insert<T, E>(tree: &mut Tree<T>, item: T) -> bool
where
    E: KeyExtractor<T>,
{
    match tree {
        Some(ref mut node) => match E::key(&item).cmp(E::key(&node.data)) {
            Ordering::Less => insert::<T, E>(&mut node.left, item),
            Ordering::Greater => insert::<T, E>(&mut node.right, item),
            Ordering::Equal => false,
        },
        None => {
            *tree = Some(Box::new(Node::new(item)));
            true
        },
    }
}

// precondition: the tree is not empty
fn remove_min<T>(tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            return remove_min(&mut node.left);
        }
    }

    tree.take().map(|mut node| {
        *tree = node.right.take();
        node
    })
}

pub fn remove<T, E>(tree: &mut Tree<T>, key: &E::Key) -> Option<T>
where
    E: KeyExtractor<T>,
{
    let mut node = tree.take()?;
    let ret = match key.cmp(E::key(&node.data)) {
        Ordering::Less => remove::<T, E>(&mut node.left, key),
        Ordering::Greater => remove::<T, E>(&mut node.right, key),
        Ordering::Equal => {
            if node.left.is_none() {
                *tree = node.right.take();
                return Some(node.data);
            }
            if node.right.is_none() {
                *tree = node.left.take();
                return Some(node.data);
            }
            debug!("removing node with two children from bst");
            remove_min(&mut node.right)
                .map(|successor| mem::replace(&mut node.data, successor.data))
        },
    };

    *tree = Some(node);
    ret
}

pub fn get<'a, T, E>(tree: &'a Tree<T>, key: &E::Key) -> Option<&'a T>
where
    E: KeyExtractor<T>,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(E::key(&node.data)) {
            Ordering::Less => get::<T, E>(&node.left, key),
            Ordering::Greater => get::<T, E>(&node.right, key),
            Ordering::Equal => Some(&node.data),
        }
    })
}

pub fn get_mut<'a, T, E>(tree: &'a mut Tree<T>, key: &E::Key) -> Option<&'a mut T>
where
    E: KeyExtractor<T>,
{
    tree.as_mut().and_then(|node| {
        match key.cmp(E::key(&node.data)) {
            Ordering::Less => get_mut::<T, E>(&mut node.left, key),
            Ordering::Greater => get_mut::<T, E>(&mut node.right, key),
            Ordering::Equal => Some(&mut node.data),
        }
    })
}

/// Returns the element whose key equals the key of `item`, inserting `item` at the vacant slot
/// where it belongs if no such element exists. The flag is `true` if `item` was inserted.
pub fn get_or_insert<'a, T, E>(tree: &'a mut Tree<T>, item: T) -> (&'a mut T, bool)
where
    E: KeyExtractor<T>,
{
    match tree {
        Some(node) => match E::key(&item).cmp(E::key(&node.data)) {
            Ordering::Less => get_or_insert::<T, E>(&mut node.left, item),
            Ordering::Greater => get_or_insert::<T, E>(&mut node.right, item),
            Ordering::Equal => (&mut node.data, false),
        },
        None => {
            let node = tree.get_or_insert_with(|| Box::new(Node::new(item)));
            (&mut node.data, true)
        },
    }
}

pub fn contains<T, E>(tree: &Tree<T>, key: &E::Key) -> bool
where
    E: KeyExtractor<T>,
{
    get::<T, E>(tree, key).is_some()
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| &node.min().data)
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| &node.max().data)
}

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => 1 + height(&node.left).max(height(&node.right)),
    }
}

pub fn in_order<'a, T>(tree: &'a Tree<T>, result: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        in_order(&node.left, result);
        result.push(&node.data);
        in_order(&node.right, result);
    }
}

pub fn pre_order<'a, T>(tree: &'a Tree<T>, result: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        result.push(&node.data);
        pre_order(&node.left, result);
        pre_order(&node.right, result);
    }
}

pub fn post_order<'a, T>(tree: &'a Tree<T>, result: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        post_order(&node.left, result);
        post_order(&node.right, result);
        result.push(&node.data);
    }
}

/// Destroys every node of the tree without recursing, so that degenerate chains do not exhaust
/// the call stack.
pub fn clear<T>(tree: &mut Tree<T>) {
    let mut stack: Vec<Box<Node<T>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
