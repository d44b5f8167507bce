use std::cell::RefCell;
use std::ops::Deref;
use std::rc::{Rc, Weak};

use weak_collections::WeakHashSet;

/// A symbol is an interned string: two symbols from the same table
/// with the same name compare equal by pointer.
#[derive(Clone, Debug)]
pub struct Symbol(Rc<str>);

impl Symbol {
    /// Makes a symbol that does not compare equal to any other symbol,
    /// interned or not, even with the same name.
    pub fn uninterned(name: &str) -> Self {
        Symbol(Rc::from(name))
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Symbol) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Deref for Symbol {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Default)]
pub struct SymbolTable(WeakHashSet<Weak<str>>);

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(rc) = self.0.get(name) {
            Symbol(rc)
        } else {
            let rc = Rc::<str>::from(name);
            self.0.insert(Rc::clone(&rc));
            Symbol(rc)
        }
    }
}

thread_local! {
    static SYMBOLS: RefCell<SymbolTable> = RefCell::new(SymbolTable::new());
}

/// Interns a symbol in the thread's default table.
pub fn intern(name: &str) -> Symbol {
    SYMBOLS.with(|table| table.borrow_mut().intern(name))
}

#[test]
fn interning() {
    let mut tab = SymbolTable::new();

    let a0 = tab.intern("a");
    let a1 = tab.intern("a");
    let b = tab.intern("b");

    assert_eq!(a0, a1);
    assert_ne!(a0, b);
    assert_eq!(&*a0, "a");
}

#[test]
fn uninterned_symbols_never_compare_equal() {
    let mut tab = SymbolTable::new();

    let interned = tab.intern("a");
    let loose = Symbol::uninterned("a");

    assert_ne!(interned, loose);
    assert_ne!(Symbol::uninterned("a"), Symbol::uninterned("a"));
    assert_eq!(&*loose, "a");
}

#[test]
fn global_table_deduplicates() {
    let x0 = intern("x");
    let x1 = intern("x");
    let y = intern("y");

    assert_eq!(x0, x1);
    assert_ne!(x0, y);
}

#[test]
fn unused_symbols_can_be_re_interned() {
    let mut tab = SymbolTable::new();

    let a = tab.intern("a");
    drop(a);

    // With no strong reference left, the old entry is dead; interning
    // again mints a fresh symbol that still deduplicates.
    let b = tab.intern("a");
    let c = tab.intern("a");
    assert_eq!(b, c);
}
