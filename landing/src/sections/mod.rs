// Views rendered by the host app besides the landing page itself

mod tool_frame;

pub use tool_frame::ToolFrame;
