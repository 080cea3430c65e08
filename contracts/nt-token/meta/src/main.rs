fn main() {
    multiversx_sc_meta_lib::cli_main::<nt_token::AbiProvider>();
}
