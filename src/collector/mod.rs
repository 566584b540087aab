//! Типизированные запросы к агенту поверх [`SnmpQuery`](crate::snmp::SnmpQuery).
//!
//! Любая ошибка транспорта или нечитаемое значение превращается в ошибку,
//! в тексте которой есть OID. Повторов нет: каждое значение запрашивается ровно один раз.

pub mod scalar_collector;
pub mod table_collector;
pub mod types;

pub use scalar_collector::ScalarCollector;
pub use table_collector::TableCollector;
pub use types::Column;
