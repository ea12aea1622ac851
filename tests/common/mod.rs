pub mod logging;
pub mod mock_node;
