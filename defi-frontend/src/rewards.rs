//! The "claim all rewards" request. No transaction is sent; the task only
//! holds the claiming indicator up for the length of `delay`.

use futures::future::{AbortHandle, Abortable, Aborted, FutureExt, LocalBoxFuture};
use std::future::Future;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClaimStatus {
    #[default]
    Idle,
    Claiming,
}

impl ClaimStatus {
    pub fn is_claiming(&self) -> bool {
        matches!(self, ClaimStatus::Claiming)
    }
}

/// Cancels a running claim. Dropping the handle does not cancel.
#[derive(Debug, Clone)]
pub struct ClaimHandle {
    abort: AbortHandle,
}

impl ClaimHandle {
    pub fn cancel(&self) {
        self.abort.abort();
    }
}

/// Reports `Claiming` before returning, then `Idle` once `delay` resolves.
/// A cancelled task never reports `Idle`.
pub fn start_claim<D, F>(
    total_rewards: f64,
    delay: D,
    on_status: F,
) -> (LocalBoxFuture<'static, ()>, ClaimHandle)
where
    D: Future<Output = ()> + 'static,
    F: Fn(ClaimStatus) + 'static,
{
    log::info!("Claiming all rewards: {:.4}", total_rewards);
    on_status(ClaimStatus::Claiming);

    let (abort, registration) = AbortHandle::new_pair();
    let task = async move {
        match Abortable::new(delay, registration).await {
            Ok(()) => {
                log::info!("Claim request finished");
                on_status(ClaimStatus::Idle);
            }
            Err(Aborted) => {
                log::info!("Claim request cancelled");
            }
        }
    };

    (task.boxed_local(), ClaimHandle { abort })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<ClaimStatus>>>, impl Fn(ClaimStatus) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |status| sink.borrow_mut().push(status))
    }

    fn timer() -> (oneshot::Sender<()>, impl Future<Output = ()> + 'static) {
        let (tx, rx) = oneshot::channel::<()>();
        (tx, async move {
            let _ = rx.await;
        })
    }

    #[test]
    fn claiming_until_delay_elapses() {
        let (seen, on_status) = recorder();
        let (fire, delay) = timer();
        let mut pool = LocalPool::new();

        let (task, _handle) = start_claim(12.5, delay, on_status);
        assert_eq!(*seen.borrow(), vec![ClaimStatus::Claiming]);

        pool.spawner().spawn_local(task).unwrap();
        pool.run_until_stalled();
        assert_eq!(seen.borrow().last(), Some(&ClaimStatus::Claiming));

        fire.send(()).unwrap();
        pool.run();
        assert_eq!(*seen.borrow(), vec![ClaimStatus::Claiming, ClaimStatus::Idle]);
    }

    #[test]
    fn zero_rewards_still_cycles() {
        let (seen, on_status) = recorder();
        let (task, _handle) = start_claim(0.0, futures::future::ready(()), on_status);

        futures::executor::block_on(task);
        assert_eq!(*seen.borrow(), vec![ClaimStatus::Claiming, ClaimStatus::Idle]);
    }

    #[test]
    fn cancelled_claim_does_not_report_completion() {
        let (seen, on_status) = recorder();
        let (_fire, delay) = timer();
        let mut pool = LocalPool::new();

        let (task, handle) = start_claim(3.0, delay, on_status);
        pool.spawner().spawn_local(task).unwrap();
        pool.run_until_stalled();

        handle.cancel();
        pool.run();
        assert_eq!(*seen.borrow(), vec![ClaimStatus::Claiming]);
    }

    #[test]
    fn status_helpers() {
        assert!(ClaimStatus::Claiming.is_claiming());
        assert!(!ClaimStatus::default().is_claiming());
    }
}
