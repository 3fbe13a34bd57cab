pub mod a001_agent_kpi;
pub mod a002_sale;
pub mod a003_commission;
