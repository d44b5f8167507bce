//! Traits for describing weak and shared pointers and the elements a
//! weak table stores.

use crate::compat::*;

/// Interface for elements that can be stored in a weak hash table.
pub trait WeakElement {
    /// The type at which a weak element can be viewed.
    ///
    /// For example, for `std::rc::Weak<T>`, this will be `std::rc::Rc<T>`.
    type Strong;

    /// Constructs a new weak element from a strong view.
    fn new(view: &Self::Strong) -> Self;

    /// Acquires a strong version of the weak element.
    fn view(&self) -> Option<Self::Strong>;

    /// Is the given weak element expired?
    ///
    /// The default implementation attempts to upgrade; implementations
    /// should override it when they can answer more cheaply.
    fn expired(&self) -> bool {
        self.view().is_none()
    }

    /// Clones a strong view.
    fn clone(view: &Self::Strong) -> Self::Strong
        where Self: Sized
    {
        Self::new(view).view().expect("WeakElement::clone")
    }
}

/// Interface for elements that can act as keys in weak hash tables.
pub trait WeakKey: WeakElement {
    /// The underlying key type.
    ///
    /// For example, for `std::rc::Weak<T>`, this will be `T`.
    type Key: ?Sized + Eq + Hash;

    /// Borrows a view of the key.
    fn with_key<F, R>(view: &Self::Strong, f: F) -> R
        where F: FnOnce(&Self::Key) -> R;
}

impl<T: ?Sized> WeakElement for rc::Weak<T> {
    type Strong = rc::Rc<T>;

    fn new(view: &Self::Strong) -> Self {
        rc::Rc::<T>::downgrade(view)
    }

    fn view(&self) -> Option<Self::Strong> {
        self.upgrade()
    }

    fn expired(&self) -> bool {
        self.strong_count() == 0
    }

    fn clone(view: &Self::Strong) -> Self::Strong {
        view.clone()
    }
}

impl<T: ?Sized + Eq + Hash> WeakKey for rc::Weak<T> {
    type Key = T;

    fn with_key<F, R>(view: &Self::Strong, f: F) -> R
        where F: FnOnce(&Self::Key) -> R
    {
        f(view)
    }
}

impl<T: ?Sized> WeakElement for sync::Weak<T> {
    type Strong = sync::Arc<T>;

    fn new(view: &Self::Strong) -> Self {
        sync::Arc::<T>::downgrade(view)
    }

    fn view(&self) -> Option<Self::Strong> {
        self.upgrade()
    }

    fn expired(&self) -> bool {
        self.strong_count() == 0
    }

    fn clone(view: &Self::Strong) -> Self::Strong {
        view.clone()
    }
}

impl<T: ?Sized + Eq + Hash> WeakKey for sync::Weak<T> {
    type Key = T;

    fn with_key<F, R>(view: &Self::Strong, f: F) -> R
        where F: FnOnce(&Self::Key) -> R
    {
        f(view)
    }
}

/// Wrapper struct for using pointer equality and hashes rather
/// than pointed-to value equality and hashes.
#[derive(Clone, Debug)]
pub struct ByPtr<K>(K);

impl<K: WeakElement> WeakElement for ByPtr<K> {
    type Strong = K::Strong;

    fn new(view: &Self::Strong) -> Self {
        ByPtr(K::new(view))
    }

    fn view(&self) -> Option<Self::Strong> {
        self.0.view()
    }

    fn expired(&self) -> bool {
        self.0.expired()
    }
}

impl<K: WeakElement> WeakKey for ByPtr<K>
    where K::Strong: Deref
{
    type Key = *const <K::Strong as Deref>::Target;

    fn with_key<F, R>(view: &Self::Strong, f: F) -> R
        where F: FnOnce(&Self::Key) -> R
    {
        f(&(view.deref() as *const _))
    }
}

/// The element stored in one bucket of a weak table.
///
/// The four container shapes (set element, weak-key pair, weak-value
/// pair, weak-weak pair) all present themselves to the table through
/// this one interface, so the table never branches on what it holds.
/// Each element exists in three forms:
///
///   - `Self` is the stored form, holding weak pointers;
///   - [`Strong`](TableElement::Strong) is the fully-present form used
///     for insertion and produced when an element is moved out;
///   - [`View`](TableElement::View) is the transient form produced by
///     upgrading the stored weak pointers. Locking yields
///     `Option<View>`, and `None` means some referent is already gone.
///
/// An element is live at an instant exactly when [`lock`] returns
/// `Some` at that instant; holding the view keeps it live.
///
/// [`lock`]: TableElement::lock
pub trait TableElement: Sized {
    /// The fully-present form of the element.
    type Strong;

    /// The locked form of the element. Every weak component has been
    /// upgraded, so the key is available and the referents are pinned.
    type View;

    /// The type the element is hashed and compared by.
    type Key: ?Sized + Eq + Hash;

    /// Demotes a strong element for storage, downgrading its weak
    /// components and taking ownership of the direct ones.
    fn store(strong: Self::Strong) -> Self;

    /// Attempts to upgrade every weak component, returning `None` if
    /// any of them has expired.
    fn lock(&self) -> Option<Self::View>;

    /// Has any weak component expired?
    ///
    /// Must not allocate; prefer a strong-count check over upgrading.
    fn expired(&self) -> bool;

    /// Recovers a strong element from the stored remains and a locked
    /// view, consuming both.
    fn steal(self, view: Self::View) -> Self::Strong;

    /// Borrows the key out of a locked view.
    ///
    /// Takes the stored element as well because some shapes keep the
    /// key in direct storage rather than in the view.
    fn with_key<F, R>(&self, view: &Self::View, f: F) -> R
        where F: FnOnce(&Self::Key) -> R;

    /// Borrows the key out of a strong element.
    fn with_strong_key<F, R>(strong: &Self::Strong, f: F) -> R
        where F: FnOnce(&Self::Key) -> R;
}

/// Adapts a bare weak pointer into a set element: its view is the
/// strong pointer itself, and the key is the referent.
#[derive(Clone, Debug)]
pub struct SetElement<W>(W);

impl<W: WeakKey> TableElement for SetElement<W> {
    type Strong = W::Strong;
    type View = W::Strong;
    type Key = W::Key;

    fn store(strong: Self::Strong) -> Self {
        SetElement(W::new(&strong))
    }

    fn lock(&self) -> Option<Self::View> {
        self.0.view()
    }

    fn expired(&self) -> bool {
        self.0.expired()
    }

    fn steal(self, view: Self::View) -> Self::Strong {
        view
    }

    fn with_key<F, R>(&self, view: &Self::View, f: F) -> R
        where F: FnOnce(&Self::Key) -> R
    {
        W::with_key(view, f)
    }

    fn with_strong_key<F, R>(strong: &Self::Strong, f: F) -> R
        where F: FnOnce(&Self::Key) -> R
    {
        W::with_key(strong, f)
    }
}
