#[cfg(test)]
mod common;

#[cfg(test)]
mod dashboard_resolver_tests;

#[cfg(test)]
mod navigation_contract_tests;

#[cfg(test)]
mod mock_aggregate_tests;

#[cfg(test)]
mod session_lifecycle_tests;

#[cfg(test)]
mod timesheet_tests;

#[cfg(test)]
mod collection_update_tests;

#[cfg(test)]
mod config_tests;
