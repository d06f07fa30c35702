use std::{cell::{Cell, RefCell}, rc::{Rc, Weak}};

use super::{error::AppError, history::{History, Scroller, Subscription}};

type Listener = Rc<RefCell<Box<dyn FnMut()>>>;

struct MemoryState {
  entries: Vec<String>,
  cursor: usize,
  pushes: usize,
  next_id: u64,
  listeners: Vec<(u64, Listener)>,
}

/// Entry stack with a cursor, mirroring what a browser tab keeps.
#[derive(Clone)]
pub struct MemoryHistory {
  state: Rc<RefCell<MemoryState>>,
}

impl MemoryHistory {
  pub fn new(start: &str) -> Self {
    Self {
      state: Rc::new(RefCell::new(MemoryState {
        entries: vec![start.to_string()],
        cursor: 0,
        pushes: 0,
        next_id: 0,
        listeners: Vec::new(),
      }))
    }
  }

  pub fn pushes(&self) -> usize {
    self.state.borrow().pushes
  }

  pub fn len(&self) -> usize {
    self.state.borrow().entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.state.borrow().entries.is_empty()
  }

  pub fn listeners(&self) -> usize {
    self.state.borrow().listeners.len()
  }

  pub fn back(&self) -> bool {
    self.go(-1)
  }

  pub fn forward(&self) -> bool {
    self.go(1)
  }

  /// Moves the cursor by `delta` entries and notifies subscribers.
  /// Returns false without notifying when the target is out of range.
  pub fn go(&self, delta: isize) -> bool {
    let listeners: Vec<Listener> = {
      let mut state = self.state.borrow_mut();
      let target = state.cursor as isize + delta;
      if delta == 0 || target < 0 || target >= state.entries.len() as isize {
        return false;
      }
      state.cursor = target as usize;
      state.listeners.iter().map(|(_, l)| l.clone()).collect()
    };
    // state borrow is released so listeners can read() back
    for listener in listeners {
      let mut callback = listener.borrow_mut();
      (&mut **callback)();
    }
    true
  }
}

impl History for MemoryHistory {
  fn read(&self) -> String {
    let state = self.state.borrow();
    state.entries[state.cursor].clone()
  }

  fn push(&self, path: &str) -> Result<(), AppError> {
    let mut state = self.state.borrow_mut();
    let keep = state.cursor + 1;
    state.entries.truncate(keep);
    state.entries.push(path.to_string());
    state.cursor = keep;
    state.pushes += 1;
    Ok(())
  }

  fn subscribe(&self, on_change: Box<dyn FnMut()>) -> Result<Subscription, AppError> {
    let id = {
      let mut state = self.state.borrow_mut();
      let id = state.next_id;
      state.next_id += 1;
      state.listeners.push((id, Rc::new(RefCell::new(on_change))));
      id
    };
    let weak: Weak<RefCell<MemoryState>> = Rc::downgrade(&self.state);
    Ok(Subscription::new(move || {
      if let Some(state) = weak.upgrade() {
        state.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
      }
    }))
  }
}

#[derive(Clone, Default)]
pub struct MemoryScroller {
  scrolls: Rc<Cell<usize>>,
}

impl MemoryScroller {
  pub fn scrolls(&self) -> usize {
    self.scrolls.get()
  }
}

impl Scroller for MemoryScroller {
  fn scroll_to_top(&self) {
    self.scrolls.set(self.scrolls.get() + 1);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn push_drops_forward_entries() {
    let history = MemoryHistory::new("/");
    history.push("/feed").unwrap();
    history.push("/trading").unwrap();
    assert!(history.back());
    history.push("/portfolio").unwrap();

    assert_eq!(history.read(), "/portfolio");
    assert_eq!(history.len(), 3);
    assert!(!history.forward());
    assert!(!history.is_empty());
    assert_eq!(history.pushes(), 3);
  }

  #[test]
  fn go_out_of_range_is_ignored() {
    let history = MemoryHistory::new("/research");
    assert!(!history.back());
    assert!(!history.go(0));
    assert_eq!(history.read(), "/research");
  }

  #[test]
  fn listeners_see_the_new_location() {
    let history = MemoryHistory::new("/");
    history.push("/feed").unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let reader = history.clone();
    let sink = seen.clone();
    let _sub = history
      .subscribe(Box::new(move || sink.borrow_mut().push(reader.read())))
      .unwrap();

    history.back();
    history.forward();
    assert_eq!(*seen.borrow(), vec!["/".to_string(), "/feed".to_string()]);
  }

  #[test]
  fn pushes_do_not_notify() {
    let history = MemoryHistory::new("/");
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let _sub = history.subscribe(Box::new(move || counter.set(counter.get() + 1))).unwrap();

    history.push("/legal/terms").unwrap();
    assert_eq!(calls.get(), 0);
  }

  #[test]
  fn dropping_the_subscription_detaches() {
    let history = MemoryHistory::new("/");
    history.push("/feed").unwrap();
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let sub = history.subscribe(Box::new(move || counter.set(counter.get() + 1))).unwrap();
    assert_eq!(history.listeners(), 1);

    sub.unsubscribe();
    assert_eq!(history.listeners(), 0);
    history.back();
    assert_eq!(calls.get(), 0);

    {
      let counter = calls.clone();
      let _scoped = history.subscribe(Box::new(move || counter.set(counter.get() + 1))).unwrap();
    }
    assert_eq!(history.listeners(), 0);
  }
}
