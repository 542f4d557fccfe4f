//! Makes a [`NetworkManager`] available to everything rendered inside a
//! provider, without passing it through every call.
//!
//! Providers nest: the innermost one is current. Each thread has its own
//! stack, so concurrent renders on different threads do not see each other.

use std::cell::RefCell;
use std::sync::Arc;

use super::manager::NetworkManager;

thread_local! {
    /// The top of the stack is the current manager.
    static NETWORK_STACK: RefCell<Vec<Arc<NetworkManager>>> = const { RefCell::new(Vec::new()) };
}

pub struct NetworkContext;

impl NetworkContext {
    /// Run `render` with `manager` as the current network manager.
    ///
    /// The previous manager is restored afterwards, even if `render` panics.
    pub fn provide<F, R>(manager: Arc<NetworkManager>, render: F) -> R
    where
        F: FnOnce() -> R,
    {
        struct PopGuard;
        impl Drop for PopGuard {
            fn drop(&mut self) {
                NETWORK_STACK.with(|stack| {
                    stack.borrow_mut().pop();
                });
            }
        }

        NETWORK_STACK.with(|stack| stack.borrow_mut().push(manager));
        let _guard = PopGuard;
        render()
    }

    /// The manager of the innermost provider, if any.
    pub fn current() -> Option<Arc<NetworkManager>> {
        NETWORK_STACK.with(|stack| stack.borrow().last().cloned())
    }
}
