fn main() {
    multiversx_sc_meta_lib::cli_main::<dual_token_voting_setup::AbiProvider>();
}
