#![no_main]
use libfuzzer_sys::fuzz_target;
use zenzero::{transform, untransform, Unstoppable};

fuzz_target!(|data: &[u8]| {
    // Restoring arbitrary bytes must never panic. When it succeeds, the
    // forward transform and a second restore must agree with it.
    let mut restored = data.to_vec();
    if untransform(&mut restored, Unstoppable).is_err() {
        return;
    }

    let mut again = restored.clone();
    transform(&mut again, Unstoppable).expect("restored image no longer transforms");
    untransform(&mut again, Unstoppable).expect("transformed image no longer restores");
    assert_eq!(again, restored, "untransform/transform cycle diverged");
});
