mod test_abi;
mod test_controller;
mod test_rpc;
