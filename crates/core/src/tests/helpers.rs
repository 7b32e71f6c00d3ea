// Copyright (C) 2026 WDW Planner Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::State;
use chrono::NaiveDate;
use wdw_planner_audit::{Actor, Cause};
use wdw_planner_domain::{ContractId, DvcContract, Resort, UseYear};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("user-123"), String::from("user"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("User request"))
}

pub fn create_test_contract(annual: u32, banked: u32, borrowed: u32) -> DvcContract {
    DvcContract::new(
        ContractId::new("riviera-001"),
        Resort::new("Riviera Resort"),
        UseYear::February,
        annual,
        banked,
        borrowed,
    )
}

pub fn create_test_state() -> State {
    let mut state: State = State::new(String::from("user-123"));
    state.contracts.push(create_test_contract(150, 0, 0));
    state
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}
