/// Audit hypotheses for the SukukFi WERC7575 settlement and vault contracts, in run order.
pub(crate) const QUESTIONS: &[&str] = &[
    "In WERC7575ShareToken. batchTransfers(), after computing net amounts, the function updates _balances[account. owner] and _rBalances[account.owner] based on net debit/credit. If a malicious validator (or signature replay) causes the same batch to execute twice, does the lack of idempotency protection allow double-application of the same balance changes, violating token supply conservation?",
    "WERC7575ShareToken. batchTransfers() skips transfers where debtor == creditor (self-transfers).  If an attacker includes a self-transfer with a non-zero amount in a batch that also includes other transfers affecting the same account, can the skipped self-transfer cause the zero-sum validation to pass while actual net effect is non-zero due to the missing debit/credit pair?",
    "In WERC7575ShareToken.batchTransfers(), the function checks require(_balances[account.owner] >= netAmount) for net debit accounts (line ~760). If an account participates in the batch with both large debits and large credits that net to a small debit, but _rBalances[account.owner] is substantial, can the function incorrectly allow the transfer by only checking _balances without considering that rBalances should also be updated, leading to inconsistent dual-balance tracking?",
    "WERC7575ShareToken.transfer() calls _spendAllowance(msg.sender, msg.sender, value) to enforce self-allowance before executing the transfer (line ~90). If a user has self-allowance but is not KYC-verified, and the recipient is KYC-verified, does the KYC check in _update() occur AFTER allowance is spent, allowing a non-KYC'd user to permanently lock their allowance without completing the transfer?",
    "In WERC7575ShareToken. transferFrom(), the function calls _spendAllowance(from, from, value) for self-allowance and then super. transferFrom() which checks allowance[from][msg.sender]. If the self-allowance check passes but the caller allowance is exactly 'value', and super.transferFrom() decrements caller allowance before the transfer completes, can a reentrancy via a malicious token hook in _update() allow the caller to reuse the same allowance for multiple transfers?",
    "WERC7575ShareToken. approve() explicitly reverts if msg.sender == spender with ERC20InvalidSpender(msg.sender) (line ~121). However, permit() function (if present) processes EIP-712 signatures to set allowances. If permit() does not have the same self-approval block, can an attacker use permit signatures to grant themselves self-allowance, bypassing the validator's permit-based authorization flow?",
    "WERC7575ShareToken.permit() validates EIP-712 signatures with ECDSA. recover() and checks the recovered address matches the owner. If the function does not verify that block.chainid matches the DOMAIN_SEPARATOR's cached chain ID before signature validation, can an attacker replay valid permit signatures from a testnet or forked chain to grant unauthorized allowances on mainnet?",
    "In WERC7575ShareToken.permit(), the function increments nonces[owner] after signature validation (line ~495). If the nonce increment happens AFTER the _approve() call and a reentrancy occurs during _approve() (e.g., via a malicious spender contract's onApprove hook if implemented), can the attacker reuse the same signature to set allowances multiple times before the nonce increments? ",
    "WERC7575ShareToken uses EIP712 domain separator with name, version, chainId, and verifyingContract.  If the contract is deployed behind a proxy (UUPS for upgradeable version) but the DOMAIN_SEPARATOR is calculated in the implementation's constructor/initializer using address(this), does the domain separator mismatch between proxy and implementation addresses invalidate all permit signatures, or can an attacker exploit the mismatch to forge signatures? ",
    "WERC7575ShareToken. adjustrBalance() allows the Revenue Admin to adjust _rBalances and _balances for multiple accounts with amounti (invested) and amountr (returned).  If amountr > amounti (profit scenario), the function increases _balances by (amountr - amounti).  If a malicious Revenue Admin (or compromised key, but admin is TRUSTED) calls this with amountr = type(uint256).max and amounti = 1, does the unchecked profit calculation cause integer overflow, minting unlimited tokens to the account and violating total supply invariant?",
    "In WERC7575ShareToken.adjustrBalance(), the function stores adjustments in _rBalanceAdjustments[account][ts] for potential cancellation. If the same (account, ts) pair is adjusted twice (replay or mistake), the require statement should prevent double-application. However, if ts is attacker-controlled and not validated against block.timestamp, can an attacker use future timestamps to bypass the 'already applied' check and apply the same adjustment multiple times?",
    "WERC7575ShareToken. adjustrBalance() decrements _rBalances[account] by amounti and increments _balances[account] by amountr. If amounti > _rBalances[account] (user has insufficient rBalance), does the function use unchecked arithmetic that allows underflow, resulting in _rBalances[account] wrapping to type(uint256).max and corrupting the dual-balance tracking system?",
    "In WERC7575ShareToken.cancelrBalanceAdjustment(), the function reverses a previous adjustment by subtracting amountr from _balances and adding amounti back to _rBalances. If the cancellation is called AFTER the user has already transferred away the amountr tokens, can the cancellation cause _balances[account] to underflow (if _balances[account] < amountr), permanently corrupting the account's balance? ",
    "WERC7575ShareToken.registerVault() adds a bidirectional mapping between asset and vault addresses using EnumerableMap and a reverse mapping.  If an attacker (or buggy Owner call, but Owner is TRUSTED) calls registerVault() with an asset that is already registered to a different vault, does the function correctly revert, or can it overwrite the existing mapping and orphan the old vault's mint/burn permissions, preventing legitimate share operations?",
    "In WERC7575ShareToken. unregisterVault(), the function removes the asset↔vault mappings.  If a vault still has outstanding shares minted (totalSupply > 0 for that asset's shares) when unregisterVault() is called, does the function allow the unregistration, permanently locking users' ability to burn those shares since mint()/burn() will revert when assetToVault[asset] returns address(0)?",
    "WERC7575ShareToken.mint() checks that msg.sender == assetToVault[asset] to authorize minting (line ~305). If an attacker deploys a malicious contract and convinces the Owner to register it as a vault for a fake asset, can the attacker's contract mint unlimited shares by calling mint() with arbitrary amounts, then transfer those shares to other users who might unknowingly treat them as legitimate?",
    "WERC7575ShareToken._update() checks require(isKycVerified[to]) to prevent non-KYC'd addresses from receiving shares (line ~259). However, if 'to' is a contract that implements a fallback function and delegatecalls to another address during the balance update, can the final recipient bypass KYC checks since the require only validates the immediate 'to' address, not the ultimate beneficiary?",
    "In WERC7575ShareToken, batchTransfers() updates _balances directly without calling _update() (which contains KYC checks for ERC20. transfer).  If the validator includes a non-KYC'd creditor in a batch transfer, does batchTransfers() enforce KYC via its own logic, or does it bypass the KYC gating entirely, allowing unauthorized addresses to receive shares through batch operations?",
    "WERC7575ShareToken.setKycStatus() (if present) is restricted to KYC Admin.  If the KYC Admin revokes KYC for a user who currently holds shares (isKycVerified[user] = false), are the user's existing shares frozen (they can't transfer), or can they still transfer to KYC-verified recipients?  If frozen, can the user's position become permanently locked if KYC is never reinstated?",
    "ShareTokenUpgradeable uses ERC-7201 namespaced storage with keccak256('erc7575. sharetoken.storage') as the slot.  If a future upgrade adds a new parent contract (e.g., ERC721Enumerable) that uses traditional storage slots (slot 0, 1, 2.. .), can the new parent's storage variables collide with the namespaced storage struct's internal layout, corrupting assetToVault mappings or investmentManager address? ",
    "In ShareTokenUpgradeable._getShareTokenStorage(), the function uses inline assembly to load the storage pointer: assembly { $. slot := SHARE_TOKEN_STORAGE_SLOT }. If a compiler bug or future Solidity version changes how storage pointers are accessed in assembly, can this cause the returned storage struct to point to an incorrect slot, leading to reads/writes of arbitrary storage locations?",
    "ShareTokenUpgradeable's ShareTokenStorage struct includes EnumerableMap. AddressToAddressMap assetToVault (line ~95). If the EnumerableMap library is upgraded in a future version and changes its internal storage layout (e.g., adding a new field), does the new layout corrupt the existing assetToVault data, preventing vaults from being looked up correctly and breaking mint/burn operations?",
    "ShareTokenUpgradeable inherits UUPSUpgradeable and overrides _authorizeUpgrade(address newImplementation) with onlyOwner (line ~175). If the Owner's private key is compromised (but Owner is TRUSTED per spec), they could upgrade to a malicious implementation. However, if _authorizeUpgrade does not validate that newImplementation is a contract (e.g., address(newImplementation). code.length > 0), can an attacker trick the Owner into upgrading to an EOA, bricking the proxy?",
    "In ShareTokenUpgradeable, if a new implementation is deployed with a different storage layout (e.g., removing the __gap array or reordering ShareTokenStorage fields), does the UUPS upgrade mechanism have any runtime checks to prevent storage corruption, or does it allow the upgrade to proceed, immediately corrupting all assetToVault mappings and investment manager settings upon the first storage write?",
    "ShareTokenUpgradeable's initializer function __ShareTokenUpgradeable_init() uses the initializer modifier from OwnableUpgradeable.  If an attacker front-runs the deployment transaction and calls initialize() on the implementation contract (not the proxy) before the legitimate deployer, can the attacker become the owner of the implementation contract, preventing the proxy from initializing correctly (since implementation's initialized flag is set)?",
    "ShareTokenUpgradeable implements an operator approval system where controllers can approve operators to act on their behalf (setOperator). If the operator approval is not scoped per vault (i.e., approving operator for vault A also grants operator permissions for vault B), can a malicious operator drain a controller's positions across all vaults once approved for a single vault?",
    "In ShareTokenUpgradeable, if setOperator(operator, approved) does not emit an event, and the operator status is later used in access control checks for sensitive operations (e.g., fulfillDeposit, investAssets), can an attacker who previously gained operator approval (then had it revoked off-chain) exploit a front-running scenario where they execute a privileged operation before the revocation transaction confirms?",
    "ERC7575VaultUpgradeable._calculateReservedAssets() sums totalPendingDeposit, totalClaimableDeposit, and totalPendingRedeem (line ~1085). However, totalPendingDeposit is denominated in asset units (e.g., 1,000,000 USDC = 1e6), while totalClaimableDeposit and totalPendingRedeem are denominated in share units (e.g., 1e18). If the function adds these values directly without converting shares to assets using convertToAssets(), does the unit mixing cause reserved assets to be massively overestimated for low-decimal assets (USDC 6 decimals) or underestimated for 18-decimal assets (DAI), leading to over-investment and potential insolvency?",
    "In ERC7575VaultUpgradeable._calculateReservedAssets(), if totalClaimableDeposit is large (e.g., 1000e18 shares representing 1000 USDC), and the function incorrectly adds it as '1000e18' assets instead of converting to '1000e6' assets, the reserved calculation becomes 1 trillion times larger than actual.  If investAssets() relies on this calculation to determine available assets (totalAssets - reserved), does this permanently prevent any investment since reserved > totalAssets, locking idle capital?",
    "ERC7575VaultUpgradeable. investAssets() calculates available assets as totalAssets() - _calculateReservedAssets() - investedAssets() (line ~1120). If _calculateReservedAssets() underestimates due to unit mixing (e.g., treating 1e18 shares as 1e18 assets when it should be 1e6 assets for USDC), can the Investment Manager inadvertently invest pending/claimable assets that should be reserved, causing deposit claims to revert when users try to claim their shares since the vault has insufficient assets?",
    "ERC7575VaultUpgradeable. fulfillDeposit() transitions pending deposit requests to claimable by decrementing totalPendingDeposit and incrementing totalClaimableDeposit (lines ~352-358). If the Investment Manager calls fulfillDeposit() for the same controller twice (due to off-chain bug or replay), does the function's lack of idempotency protection allow totalClaimableDeposit to be incremented twice while totalPendingDeposit is only decremented once (if it underflows to zero on second call), violating the async state invariant?",
    "In ERC7575VaultUpgradeable.deposit(), the function checks claimableDepositRequest[controller] >= shares and decrements it (line ~405). If the controller has exactly 'shares' claimable but the function uses '>' instead of '>=' in the require check, can the controller never claim their final wei of shares, permanently locking a small amount of value?  Conversely, if the check is '>=' but the decrement uses unchecked arithmetic, can claimableDepositRequest underflow if shares > claimableDepositRequest due to a prior partial claim?",
    "ERC7575VaultUpgradeable.cancelDepositRequest() allows a controller to cancel their pending deposit and reclaim assets (line ~480). If the controller calls cancelDepositRequest() and simultaneously (via another transaction) the Investment Manager calls fulfillDeposit() for the same controller, does the lack of atomicity allow a race condition where the pending request is both fulfilled (assets converted to claimable shares) and canceled (assets returned to controller), causing the controller to receive assets twice and the vault to lose funds?",
    "In ERC7575VaultUpgradeable.fulfillRedeem(), the function mints shares to the vault as an intermediate step before burning them (line ~560). If the ShareToken's mint() function has a reentrancy hook (e.g., calling back into the vault), can an attacker exploit this to re-enter fulfillRedeem() and double-decrement totalPendingRedeem, causing the vault to release more assets than corresponding shares were burned, violating solvency? ",
    "ERC7575VaultUpgradeable.convertToShares() multiplies assets by offset (10^(18 - decimals)) to normalize to 18-decimal shares (line ~1230). For USDC (6 decimals), offset = 1e12.  If an attacker deposits type(uint256).max / 1e12 USDC (approximately 1e65 USDC), does the multiplication assets * offset overflow in unchecked arithmetic, wrapping to a small number and minting far fewer shares than deserved, allowing the attacker to later redeem those shares for the full deposit amount and drain the vault?",
    "In ERC7575VaultUpgradeable.convertToAssets(), the function divides shares by offset (line ~1245). If offset is calculated incorrectly (e.g., using decimals from a different asset due to misconfiguration), can the conversion return assets with wrong magnitude?  For example, if USDC vault incorrectly uses DAI's decimals (18), offset = 1, and 1e18 shares converts to 1e18 assets instead of 1e6 USDC, causing massive over-redemption? ",
    "ERC7575VaultUpgradeable calculates offset in the initializer as 10 ** (18 - assetDecimals) (line ~1150). If assetDecimals > 18 (e.g., a token with 24 decimals, though rare), does the exponent become negative, causing 10 ** (18 - 24) = 10 ** (-6) to revert or compute incorrectly in Solidity, preventing vault initialization for high-decimal assets?",
    "In ERC7575VaultUpgradeable, if the asset token's decimals() function is malicious and returns a value > 77 (since 10^(18-decimals) would overflow uint256 if decimals < -59, but more realistically if decimals is manipulated), can the offset calculation in the initializer cause an integer overflow, setting offset to 0 or a wrapped value, breaking all share conversions and preventing deposits/withdrawals?",
    "ERC7575VaultUpgradeable.investAssets() calls investmentVault.deposit(assets, investmentShareToken) to invest idle assets (line ~705). If the investmentVault is a malicious contract deployed by an attacker (but Owner is TRUSTED and would not register a malicious vault), it could transfer assets to itself but not mint investment shares, causing the vault to lose tracking of invested capital. However, since Owner is trusted, the real risk is: if the external investment vault has a reentrancy vulnerability, can it call back into the vault during deposit and trigger a state corruption (e.g., double-incrementing investedAssets)?",
    "In ERC7575VaultUpgradeable.withdrawFromInvestment(), the function redeems investment shares to retrieve assets (line ~780). If the investment vault's redeem() function returns fewer assets than expected (e.g., due to loss or slippage), but withdrawFromInvestment() does not validate that returnedAssets >= expectedAssets (based on shares redeemed), can the vault's accounting become inconsistent where investedAssets decrements by the intended amount but the actual asset balance increases by less, causing future insolvency?",
    "ERC7575VaultUpgradeable.investAssets() checks available = totalAssets - reserved - investedAssets and requires assets <= available (line ~700). If investedAssets() returns a cached value (e.g., stored in storage) rather than querying the investment vault's actual share balance, and the investment vault has suffered a loss (investment shares now worth less than originally deposited), does the vault's accounting overestimate investedAssets, allowing investAssets() to invest more than truly available and reserve insufficient assets for pending claims?",
    "ERC7575VaultUpgradeable inherits UUPSUpgradeable and restricts _authorizeUpgrade to onlyOwner.  If a malicious implementation is deployed with a storage layout that moves the 'asset' address field (currently at VaultStorage.asset, line ~98) to a different slot, does the upgrade immediately corrupt the asset address, causing subsequent deposit() calls to transfer tokens to/from the wrong asset, leading to fund loss?",
    "In ERC7575VaultUpgradeable, the VaultStorage struct includes a __gap array for future expansion (if present). If a future upgrade adds 10 new storage variables but removes the __gap or reduces its size by less than 10 slots, does the new storage layout shift existing variables (e.g., controllerToRequest mapping) to different slots, corrupting all pending/claimable request data and preventing users from claiming their deposits/redeems?",
    "ERC7575VaultUpgradeable uses ERC-7201 namespaced storage with slot = keccak256('erc7575.vault.storage'). If the upgrade mechanism does not prevent the new implementation from using a different namespace (e.g., keccak256('erc7575.vault.storage.v2')), can the new implementation operate on a completely fresh storage struct, losing all existing vault state (asset, totalPendingDeposit, controllerToRequest), effectively resetting the vault and locking all user funds?",
    "WERC7575Vault constructor calculates _offset = 10 ** (18 - _decimals) where _decimals is read from the asset token's decimals() function (line ~88). If the asset contract is malicious and returns decimals() = 0, does _offset = 10^18, causing convertToShares() to multiply by 1e18 and potentially overflow for any reasonable deposit amount, DoS'ing the vault? ",
    "In WERC7575Vault.convertToShares(), the function returns assets * _offset (line ~252). If _decimals = 18 (DAI), _offset = 1, and assets = type(uint256).max, does the multiplication overflow silently in unchecked arithmetic, wrapping to a small value and minting far fewer shares than deserved, allowing the attacker to deposit massive amounts and withdraw later by redeeming at correct conversion, draining the vault? ",
    "WERC7575Vault.convertToAssets() divides shares / _offset (line ~261). If _offset = 1 (for 18-decimal assets), the division is identity.  But if _offset was incorrectly calculated due to a non-standard asset token that changes decimals() return value after deployment (e.g., upgradeable token), can the conversion return incorrect asset amounts, causing withdrawals to over/under-pay users?",
    "WERC7575Vault.deposit() calls _shareToken.mint(msg.sender, shares) to issue shares (line ~145). If the ShareToken contract has a reentrancy vulnerability in its mint() function (e.g., it calls an external hook before updating balances), can an attacker re-enter deposit() and mint shares multiple times for a single asset deposit, violating the token supply conservation invariant?",
    "In WERC7575Vault.redeem(), the function burns shares via _shareToken.burn(msg. sender, shares) and then transfers assets to the receiver (line ~180). If the asset token is a malicious ERC20 that re-enters redeem() during the transfer (e.g., via a transfer hook), can the attacker burn shares once but withdraw assets multiple times before the share burn completes, draining the vault?",
    "WERC7575Vault.deposit() converts assets to shares using convertToShares(assets).  If the conversion rounds down (due to integer division) and an attacker makes many small deposits (e.g., 1 wei each), can the rounding loss accumulate such that the attacker deposits X assets but receives < X equivalent shares, and the vault retains the dust as profit?  Conversely, if rounding up, can the attacker receive more shares than deserved, inflating supply? ",
    "SafeTokenTransfers.safeTransferToken() uses a low-level call to token.transfer(to, amount) and checks the return data (line ~15). If the token contract returns true in returndata but actually reverts inside a try-catch block (e.g., a malicious token that catches its own revert and returns success), does safeTransferToken() incorrectly assume the transfer succeeded, allowing the vault to update balances without actually receiving tokens?",
    "In SafeTokenTransfers.safeTransferToken(), if the token contract does not return any data (returndata.length == 0) and the call succeeds, the function treats it as success (line ~18). If the token is a malicious contract that implements transfer() as a no-op (simply returns without reverting or transferring), does the vault accept the 'transfer' as successful and credit the user with shares, despite no actual tokens being received?",
    "SafeTokenTransfers.safeTransferFrom() calls token.transferFrom(from, to, amount) via low-level call.  If the 'from' address is a malicious contract that implements ERC20 approval but does not actually hold the asset tokens, can the transferFrom call succeed (return true) but transfer 0 tokens (or revert silently), causing the vault to mint shares for deposits that never materialize?",
    "When ERC7575VaultUpgradeable.fulfillDeposit() mints shares to the vault (as an intermediate holder) before transferring to the controller, the ShareToken's mint() function is called. If WERC7575ShareToken.mint() checks msg.sender == assetToVault[asset] but ERC7575VaultUpgradeable is a UUPS proxy, does the check compare against the proxy address or implementation address?  If implementation, can an attacker deploy a malicious proxy with the same implementation and mint unauthorized shares? ",
    "ERC7575VaultUpgradeable.investAssets() deposits assets into an external investment vault and expects investment shares to be minted to the ShareToken contract (investmentShareToken address). If the investment vault mints shares to the vault proxy instead of the ShareToken, does this break the accounting where the vault's investedAssets() calculation relies on ShareToken holding the investment shares, causing investedAssets() to return 0 and allowing over-investment?",
    "WERC7575ShareToken.batchTransfers() is called by the Validator to settle carrier obligations.  If a batch includes a transfer from a vault address (e.g., as part of revenue distribution), does the batch transfer reduce the vault's share balance, and can this cause ERC7575VaultUpgradeable.totalAssets() to decrease unexpectedly, breaking the reserved asset calculation and allowing the Investment Manager to over-invest reserved funds?",
    "In WERC7575ShareToken.batchTransfers(), if all transfers in the batch are self-transfers (debtor == creditor), the function skips all entries and never updates any balances (line ~690). Does the function still emit Transfer events for these skipped transfers, and if so, can off-chain systems misinterpret the events as actual transfers, causing accounting discrepancies in external integrations?",
    "ERC7575VaultUpgradeable.requestDeposit() accepts assets from the user and increments totalPendingDeposit (line ~320). If the user immediately calls cancelDepositRequest() in the same block, the pending request is decremented and assets returned (line ~485). If the vault has multiple users with pending requests and the cancelation causes totalPendingDeposit to underflow (if storage was corrupted), can this permanently DoS all other users' fulfillDeposit() calls since the decrement would revert?",
    "WERC7575ShareToken.permit() allows granting allowances via signature. If a user signs a permit for type(uint256).max allowance with deadline = type(uint256).max (infinite), and later the user's address is de-KYC'd (isKycVerified = false), can a holder of the permit signature still use it to transfer the user's shares to a KYC-verified recipient, bypassing the user's inability to directly transfer due to KYC revocation?",
    "In ERC7575VaultUpgradeable, if totalPendingDeposit and totalClaimableDeposit both approach type(uint256).max (e.g., vault has been operating for years with massive volume), can the addition totalPendingDeposit + totalClaimableDeposit in _calculateReservedAssets() overflow, wrapping to a small number and causing the vault to massively under-reserve, allowing investAssets() to invest nearly all assets and leaving insufficient funds for pending claims?",
    "WERC7575Vault.convertToShares(0) returns 0 * _offset = 0.  If a user calls deposit(0, receiver), does the function attempt to mint 0 shares, and does the ShareToken's mint(receiver, 0) emit a Transfer event with amount=0? If so, can this be abused to spam Transfer events or bypass KYC checks (since _update() might not validate 'to' for zero-value transfers)?",
    "ERC7575VaultUpgradeable.fulfillDeposit() calculates shares = convertToShares(assets) and increments totalClaimableDeposit by shares (line ~355). If assets = 1 wei and offset = 1e12 (USDC), shares = 1e12.  If the user's pendingDepositRequest was 1 wei but they are credited with 1e12 shares (due to decimal normalization), can the user claim 1e12 shares and redeem them for 1 USDC (1e6 wei), profiting 1e6x from the conversion rounding? ",
    "WERC7575ShareToken.batchTransfers() checks that arrays have the same length (debtors.length == creditors. length == amounts.length).  If an attacker submits a batch where debtors.length = 100 but creditors.length = 99 (due to off-chain bug), the function reverts with ArrayLengthMismatch.  However, if the validator's off-chain system has a bug that silently pads creditors with address(0), does the batch execute with address(0) as creditor, causing tokens to be burned (transferred to zero address) and violating the zero-sum invariant?",
    "ERC7575VaultUpgradeable.fulfillDeposit() has the nonReentrant modifier, but the function calls _shareToken.mint() (external call) before updating controllerToRequest[controller]. claimableDepositRequest (line ~355). If ShareToken's mint() is malicious and calls back into the vault (e.g., via a mint hook), can it re-enter fulfillDeposit() and double-increment claimableDepositRequest before the first call completes, allowing the controller to claim shares twice?",
    "WERC7575Vault.deposit() calls asset.transferFrom(msg.sender, address(this), assets) and then _shareToken.mint(msg.sender, shares). If the asset token has a malicious transferFrom that re-enters deposit() before returning, does the reentrancy guard (if present) prevent the re-entry, or can the attacker deposit once but mint shares multiple times? ",
    "In ERC7575VaultUpgradeable.investAssets(), the function calls investmentVault.deposit(assets, investmentShareToken) (external call) and then updates investedAssets storage. If the investment vault re-enters and calls withdrawFromInvestment() during the same transaction, can the nested call decrement investedAssets before the outer call increments it, causing accounting corruption?",
    "WERC7575ShareToken.batchTransfers() has onlyValidator modifier, restricting calls to the validator address (line ~630). If the validator address is set to address(0) during initialization (or Owner accidentally calls setValidator(address(0))), does the modifier allow ANY caller (since msg.sender == address(0) is false, but no valid validator exists), effectively DoS'ing all batch transfers?",
    "ERC7575VaultUpgradeable.fulfillDeposit() has onlyInvestmentManager modifier.  If the Investment Manager role is transferred to a malicious actor (but Investment Manager is TRUSTED per spec), they could fulfill requests with incorrect share amounts.  However, the realistic attack is: if setInvestmentManager() does not validate the new address is a contract or EOA with specific capabilities, can the Owner accidentally set investmentManager to a contract that cannot call fulfill functions, permanently locking all async requests?",
    "In WERC7575ShareToken.registerVault(), the function has onlyOwner modifier. If the Owner is a multisig and one signer is compromised, can the compromised signer call registerVault() with a malicious vault address before other signers notice, allowing the malicious vault to mint unlimited shares via mint() calls until the registration is revoked?",
    "ERC7575VaultUpgradeable.convertToShares() for a 6-decimal asset (USDC) converts 1 USDC (1e6) to 1e18 shares. If totalSupply is 1e18 shares and totalAssets is 1 USDC (1e6), the share price is 1:1.  But if totalAssets increases by 1 wei to 1e6 + 1, the new share price is (1e6 + 1) / 1e18 assets per share.  For the next deposit of 1 USDC (1e6), shares = 1e6 * 1e18 / (1e6 + 1) ≈ 1e18 - epsilon. Can an attacker exploit this rounding to gradually extract value by depositing and withdrawing repeatedly?",
    "In WERC7575Vault. convertToAssets(1), if offset = 1e12 (USDC), the function returns 1 / 1e12 = 0 due to integer division. If a user holds 1e11 shares (less than 1 USDC equivalent), convertToAssets(1e11) = 1e11 / 1e12 = 0, meaning they cannot redeem any assets. Can the user's shares become permanently unredeemable dust, violating the withdrawal availability invariant?",
    "ERC7575VaultUpgradeable uses _convertToAssets() in reserved asset calculation.  If the vault holds both DAI (18 decimals, offset=1) and USDC (6 decimals, offset=1e12), and _calculateReservedAssets() is called on a USDC vault but accidentally uses DAI's offset, the conversion returns assets with wrong magnitude (1e12x error). If the vault operates multi-asset (though spec says one vault per asset), can this cross-contamination occur?",
    "ShareTokenUpgradeable's ShareTokenStorage struct uses EnumerableMap.AddressToAddressMap for assetToVault (line ~95). If the OpenZeppelin EnumerableMap library is upgraded in a dependency and changes the internal layout (e.g., adding a new field), and the ShareToken contract is redeployed without updating the storage struct, does the layout mismatch corrupt all asset-vault mappings, preventing vaults from being looked up and breaking all mint/burn operations?",
    "ERC7575VaultUpgradeable's VaultStorage struct includes bool isActive (line ~120). In Solidity, bool is stored as uint8 in storage.  If a future upgrade mistakenly changes isActive to uint8 or adds a new uint8 field adjacent to it, does the storage slot packing/unpacking logic shift, causing isActive reads to return incorrect values and potentially DoS'ing deposits when isActive is read as false despite being set to true?",
    "In WERC7575ShareToken, if the contract is deployed with a specific storage layout and later a library function (e.g., in SafeERC20 or SafeTokenTransfers) is updated to use delegatecall, can the delegatecall context operate on the caller's storage, accidentally overwriting _balances or _rBalances mappings and corrupting user balances?",
    "WERC7575ShareToken.batchTransfers() enforces zero-sum by netting debits and credits. If the validator submits a batch where sum(amounts) for debtors != sum(amounts) for creditors due to an off-chain calculation error, does the on-chain netting algorithm still pass the zero-sum check (since it only validates final balances are sufficient), or does it have an explicit sum(amounts_in) == sum(amounts_out) validation that would catch the discrepancy?",
    "In batchTransfers(), the netting process aggregates net amounts per account. If two entries in the batch involve the same debtor→creditor pair with amounts X and Y, does the netting correctly sum them as a single net transfer of X+Y, or does it process them as separate transfers? If separate, can an attacker exploit this to cause the zero-sum validation to pass while individual transfers violate balance constraints?",
    "WERC7575ShareToken.batchTransfers() updates _rBalances based on net debits/credits. If an account has net debit (pays out), _rBalances increases (line ~760). If net credit (receives), _rBalances decreases (line ~770). However, if the account receives more credit than their _rBalances (rBalances < netCredit), the function sets _rBalances = 0 (line ~773). Does this silent truncation break the dual-balance invariant where _balances + _rBalances should represent total wealth, potentially hiding lost funds?",
    "WERC7575ShareToken. permit() validates deadline > block.timestamp (or >=). If a user signs a permit with deadline = block.timestamp + 1 (expires next block), and the transaction is delayed in the mempool for multiple blocks, the permit becomes invalid. However, if the signature is then replayed on a different chain (with same address but different chain ID), can the permit be used on the new chain if the DOMAIN_SEPARATOR is not chain-specific?",
    "In permit(), after signature validation, the function calls _approve(owner, spender, value).  If _approve emits an Approval event but the actual allowance storage update is conditional (e.g., only updates if value != current allowance), can an attacker spam permit transactions with the same signature (if nonce is not incremented atomically) to generate Approval events without actually changing allowances, causing off-chain systems to misinterpret allowance states?",
    "ERC7575VaultUpgradeable.investAssets() requires the investment vault to mint shares to investmentShareToken address (the ShareToken contract). If the investment vault's deposit() function is malicious and mints shares to msg.sender (the vault proxy) instead, does the ShareToken contract not receive the shares, causing investedAssets() (which queries ShareToken's balance) to return 0, allowing the Investment Manager to re-invest the same assets multiple times and over-leverage?",
    "In withdrawFromInvestment(), the function calls investmentVault.redeem(shares, vault, investmentShareToken) expecting assets to be returned to the vault (line ~785). If the investment vault's redeem() has a withdrawal fee (e.g., returns 99% of expected assets), does the vault's accounting assume 100% return, causing a slow balance leak where investedAssets decrements by full amount but actual assets received is less, leading to gradual insolvency?",
    "ERC7575VaultUpgradeable.investedAssets() returns the balance of investment shares held by the ShareToken (line ~1100). If the ShareToken contract holds investment shares for multiple vaults (e.g., USDC vault and DAI vault both invest in the same WUSD investment vault), does investedAssets() incorrectly return the total balance across all vaults, causing one vault to count another vault's investments as its own and allowing over-investment?",
    "ERC7575VaultUpgradeable.cancelDepositRequest() allows canceling pending deposits (line ~480). If a controller has pendingDepositRequest = X and the Investment Manager simultaneously calls fulfillDeposit(controller, X), can the race condition result in: (1) fulfillDeposit moves X from pending to claimable, (2) cancelDepositRequest tries to decrement pending (now 0), causing underflow and reverting?  Or worse, if unchecked, wrapping pending to type(uint256).max and corrupting the vault state?",
    "In cancelRedeemRequest(), the function returns shares to the controller by transferring from the vault back to the controller (line ~520). If the controller has delegated their shares to an operator, and the operator cancels the redeem request, do the shares get transferred to the controller or the operator? If operator, can the operator steal shares by repeatedly requesting and canceling redeems?",
    "ERC7575VaultUpgradeable.cancelDepositRequest() checks controllerToRequest[controller].pendingDepositRequest >= assets before decrementing (line ~482). If the check is '>' instead of '>=', can a controller with exactly 'assets' pending never cancel (edge case DoS)? If '>=', and assets > pending due to concurrent fulfillDeposit, does the unchecked decrement wrap pending to type(uint256).max, corrupting state? ",
    "DecimalConstants.SHARE_TOKEN_DECIMALS is hardcoded to 18 (line 10). If a ShareToken contract is deployed with decimals() returning a value other than 18 due to a misconfiguration or malicious override of the decimals() function, and the validation in WERC7575ShareToken.constructor() (line 165) or ShareTokenUpgradeable.initialize() (line 121) fails to catch this due to incorrect inheritance order or override behavior, could this lead to incorrect scaling factor calculations in vault initialization that permanently corrupt asset-to-share conversions?",
    "DecimalConstants.MIN_ASSET_DECIMALS is set to 6 (line 13). In ERC7575VaultUpgradeable.initialize() (line 161), the validation checks `decimals < MIN_ASSET_DECIMALS`, rejecting assets with fewer than 6 decimals. However, if an attacker deploys a malicious ERC20 token whose decimals() function returns different values on subsequent calls (e.g., 6 during vault initialization, then 5 during conversions), could this bypass the validation and cause the scaling factor to be calculated incorrectly, leading to asset theft when users deposit/withdraw?",
    "In WERC7575Vault.constructor() (line 107) and ERC7575VaultUpgradeable.initialize() (line 186), the scaling factor is calculated as `10 ** (SHARE_TOKEN_DECIMALS - assetDecimals)`. For an asset with exactly MIN_ASSET_DECIMALS (6), this yields 10^12. If assetDecimals is obtained from a malicious token that reports 6 decimals during initialization but the token's actual precision changes in its transfer() implementation (e.g., silently truncating values), could this create a mismatch between the stored scaling factor and actual token behavior, allowing an attacker to exploit conversion rounding to steal funds?",
    "The scaling factor calculation `10 ** (SHARE_TOKEN_DECIMALS - assetDecimals)` is stored as uint64 in both WERC7575Vault._scalingFactor (line 111) and ERC7575VaultUpgradeable's VaultStorage.scalingFactor (line 188). The code validates `scalingFactor > type(uint64).max` and reverts. However, for MIN_ASSET_DECIMALS = 6, the scaling factor is 10^12 = 1,000,000,000,000, which is well below uint64.max. If MIN_ASSET_DECIMALS were ever reduced in a future version (e.g., to 0), the scaling factor 10^18 would exceed uint64.max (18,446,744,073,709,551,615). Could upgrading DecimalConstants.MIN_ASSET_DECIMALS without corresponding changes to the uint64 scaling factor storage type lead to deployment failures or silent truncation?",
    "In _convertToShares() implementations (WERC7575Vault line 219, ERC7575VaultUpgradeable similar), the conversion uses `Math.mulDiv(assets, scalingFactor, 1, rounding)`. For an asset with MIN_ASSET_DECIMALS (6) and large asset amounts approaching type(uint256).max, the multiplication `assets * scalingFactor` (where scalingFactor = 10^12) could overflow before Math.mulDiv's internal handling. While Math.mulDiv is designed to prevent overflow, if an attacker deposits assets = type(uint256).max / 10^12 + 1, could this cause an unexpected revert or incorrect share minting that breaks the conversion accuracy invariant?",
    "In _convertToAssets() (WERC7575Vault line 237-245), when assetDecimals equals SHARE_TOKEN_DECIMALS (18), the code shortcuts to `return shares` (line 242). However, if shares were originally minted using a scaling factor from a different asset decimal configuration (e.g., vault was upgraded or asset mapping changed), could returning shares directly without division cause a 10^12x value discrepancy for users who deposited with 6-decimal assets but are now redeeming against an 18-decimal asset?",
    "The _convertToShares() function uses Math.mulDiv(assets, scalingFactor, 1, rounding) where scalingFactor = 10^(18 - assetDecimals). For assets with exactly MIN_ASSET_DECIMALS (6), depositing 1 asset unit (1e6 in base units) results in 1e18 shares. If a user deposits 1 base unit (0.000001 USDC), they receive 10^12 base shares. Due to rounding in subsequent operations, when converting back using _convertToAssets() with Floor rounding, could the user lose up to 10^12 - 1 base share units (0.000000000999999999 shares), which for large accumulated amounts could enable an attacker to profit from repeated deposit-withdraw cycles?",
    "DecimalConstants.MIN_ASSET_DECIMALS = 6 restricts assets to 6-18 decimals. In ERC7575VaultUpgradeable.initialize() (line 161), the check is `decimals < MIN_ASSET_DECIMALS`. If an attacker creates a malicious ERC20 token that returns decimals() = 5 (below minimum) but whose transfer() function operates with 6 effective decimals (by scaling all amounts internally by 10), the vault initialization would reject it. However, if the attacker first deploys with decimals() = 6 to pass validation, then uses a proxy upgrade pattern on the ERC20 to change decimals() to 5, could subsequent conversion operations use the now-stale scaling factor and enable the attacker to withdraw more assets than they deposited?",
    "For an asset with exactly MIN_ASSET_DECIMALS (6), the maximum scaling factor is 10^12. In batch settlement operations (WERC7575ShareToken.batchTransfers), if multiple users transfer shares that were minted from 6-decimal assets, and the zero-sum validation (net balance changes = 0) is performed on share amounts (18 decimals) rather than asset amounts (6 decimals), could rounding errors in the decimal conversion accumulate across a batch of 100 transfers (MAX_BATCH_SIZE) such that the zero-sum invariant is violated by up to 100 wei, allowing an attacker to drain small amounts repeatedly?",
    "DecimalConstants.SHARE_TOKEN_DECIMALS = 18 is enforced in WERC7575ShareToken.constructor() (line 165) by checking `decimals() != SHARE_TOKEN_DECIMALS`. The decimals() function in ERC20 returns a uint8. If an attacker deploys a ShareToken implementation that overrides decimals() with a malicious implementation returning 18 during construction but later returning a different value (e.g., via upgradeable proxy), could this bypass the validation and cause the vault's scaling factor calculations to become inconsistent with the actual share token decimals, leading to asset theft?",
    "All share tokens enforce SHARE_TOKEN_DECIMALS = 18 regardless of underlying asset decimals. In the dual balance tracking system (_balances and _rBalances in WERC7575ShareToken), if rBalance adjustments (adjustRBalance function) are calculated using asset values (with varying decimals) but stored in the same 18-decimal precision as _balances, could an attacker exploit the precision mismatch by triggering investment profits/losses that cause rBalance to accumulate rounding errors, eventually allowing them to claim more shares than their _balances entitlement?",
    "The Settlement Layer (WERC7575ShareToken) tracks balances in 18 decimals, while the Investment Layer (ERC7575VaultUpgradeable) converts between asset decimals (6-18) and shares (18). When fulfillDepositRequest() is called (ERC7575VaultUpgradeable), it mints shares to the user via ShareToken.mint(). If the request was created with asset amounts in 6 decimals, converted to 18-decimal shares via _convertToShares(), and then the asset's actual decimals() value changes (via malicious token upgrade) before fulfillment, could the minted share amount be incorrect, violating the conversion accuracy invariant and allowing theft?",
    "In ERC7575VaultUpgradeable.fulfillRedeemRequest(), the claimable shares (in 18 decimals) are burned via ShareToken.burn(), and the corresponding asset amount is calculated using _convertToAssets() with the current scaling factor. If an attacker requests redemption when the asset has 18 decimals (scalingFactor = 1), but the vault's asset is later changed to a 6-decimal asset (scalingFactor = 10^12) before fulfillment, could the _convertToAssets() calculation return 10^12x fewer assets than expected, causing the user to lose funds while the excess remains locked in the vault?",
    "In ERC7575VaultUpgradeable.reservedAssets(), the function calculates `convertToAssets(pendingDepositRequest[receiver]) + convertToAssets(claimableRedeemRequest[receiver])`. Both pendingDepositRequest and claimableRedeemRequest are stored in share amounts (18 decimals). When converting to assets using _convertToAssets() with the scaling factor derived from MIN_ASSET_DECIMALS (6), if the asset has exactly 6 decimals, each conversion divides by 10^12. For pending amounts less than 10^12 shares, the conversion rounds down to 0 assets, potentially under-counting reserved assets. Could an attacker create many small redemption requests (e.g., 10^11 shares each) that individually round to 0 assets but collectively represent significant value, bypassing the reserved asset protection and allowing over-investment of vault funds?",
    "The investAssets() function in ERC7575VaultUpgradeable checks that `investedAssets + amount <= totalAssets() - reservedAssets()` to prevent over-investment. If reserved assets are calculated by converting pending/claimable share amounts (18 decimals) to asset amounts (6-18 decimals) using _convertToAssets() with Floor rounding, each conversion can lose up to 1 wei of precision. For a vault with 1000 pending requests, this could under-report reserved assets by up to 1000 wei. If asset has MIN_ASSET_DECIMALS (6), 1000 wei = 0.000000001 assets. While small, could an attacker exploit this by timing investments immediately after batch fulfillments to maximize the rounding loss, eventually allowing investment of assets that should be reserved for redemptions?",
    "DecimalConstants.MIN_ASSET_DECIMALS and SHARE_TOKEN_DECIMALS are declared as constants, making them immutable. However, if a future protocol upgrade requires supporting assets with fewer than 6 decimals (e.g., a token with 2 decimals), the only way to change MIN_ASSET_DECIMALS would be to deploy a new DecimalConstants library and update all contracts to import it. If this change is performed incorrectly—for example, upgrading ERC7575VaultUpgradeable to use new constants but forgetting to upgrade WERC7575Vault—could the two vault implementations have inconsistent decimal validations, allowing an attacker to create vaults for 2-decimal assets in the non-upgradeable version while the upgradeable version rejects them, causing asset-vault mapping conflicts?",
    "The scaling factor is stored as uint64 in both vault implementations. The maximum uint64 value is approximately 1.8e19. The maximum scaling factor occurs when assetDecimals = MIN_ASSET_DECIMALS = 6, giving 10^(18-6) = 10^12. This is well within uint64 range. However, if DecimalConstants.MIN_ASSET_DECIMALS were reduced to 0 (to support tokens like Bitcoin with 0 decimals), the scaling factor would be 10^18, which exceeds uint64.max. The validation checks for this and reverts with ScalingFactorTooLarge(). But could an attacker exploit a race condition where MIN_ASSET_DECIMALS is changed in DecimalConstants.sol but existing vaults with the old constants still exist, creating an inconsistency that allows bypass of the uint64 check in new deployments?",
    "SukukFi supports multiple assets via the asset-to-vault registry in WERC7575ShareToken. Each asset can have different decimals (6-18), and each vault calculates its own scaling factor. If Vault A uses an asset with 6 decimals (scalingFactor = 10^12) and Vault B uses an asset with 18 decimals (scalingFactor = 1), both mint shares to the same ShareToken with 18 decimals. When a user transfers shares minted from Vault A to another user who wants to redeem them via Vault B, the shares are in 18 decimals but represent different underlying asset values. Could this cross-vault share transfer enable arbitrage where the attacker exploits the decimal normalization to extract value by depositing in one vault and redeeming in another?",
    "The protocol enforces the invariant that `convertToShares(convertToAssets(x)) ≈ x` within 1 wei rounding. For an asset with MIN_ASSET_DECIMALS (6), convertToAssets() divides shares by 10^12 with Floor rounding, potentially losing up to (10^12 - 1) of precision. If x = 10^12 shares (representing 1 asset unit), convertToAssets(x) = 1 asset, then convertToShares(1 asset) = 10^12 shares, recovering the original value. However, if x = 10^12 + 1 shares, convertToAssets(x) still equals 1 asset (floor division), and convertToShares(1) = 10^12 shares, losing 1 share. Over many round-trip conversions in async deposit-redeem cycles, could this 1-share loss per conversion accumulate to a significant amount that violates the ≤1 wei rounding tolerance and enables profit extraction?",
    "In WERC7575ShareToken, permits authorize transfer of share amounts specified in 18 decimals (due to SHARE_TOKEN_DECIMALS = 18). When a permit is used in transferFrom() or batchTransfers(), the share amounts are directly compared against allowances without decimal conversion. If the underlying asset has MIN_ASSET_DECIMALS (6), and a user requests a permit for 10^12 shares (= 1 asset), but the UI or permit generator miscalculates by using asset decimals (6) instead of share decimals (18), the permit would be for 10^6 units instead of 10^12. Could this decimal confusion in permit generation lead to users unintentionally authorizing 10^6x smaller or larger amounts, enabling either denial of service (permit too small) or unauthorized large transfers (permit too large)?",
    "ERC7575VaultUpgradeable.investAssets() transfers assets to an external investment vault. The amount parameter is in asset decimals (6-18 depending on the asset). If the investment vault expects amounts in a different decimal precision (e.g., it internally normalizes to 18 decimals), and the integration does not properly convert between the SukukFi vault's asset decimals and the investment vault's expected decimals, could this cause the invested amount to be misinterpreted? For example, investing 1000 units of a 6-decimal asset (1000e6) could be interpreted by the investment vault as 1000e18, resulting in a 10^12x accounting error that breaks the reserved asset protection invariant.",
    "In ERC7575VaultUpgradeable.initialize() (line 186), the decimal offset is calculated as `SHARE_TOKEN_DECIMALS - assetDecimals`. For an asset with exactly SHARE_TOKEN_DECIMALS (18), the offset is 0, and scalingFactor = 10^0 = 1. The code has a special case in _convertToAssets() (line 241) that returns shares directly when scalingFactor == 1. However, if assetDecimals is obtained from a token's decimals() call that mistakenly returns 19 (higher than max), the validation at line 161 would reject it because the check is `decimals > SHARE_TOKEN_DECIMALS`. But if the decimals() call is maliciously manipulated to return exactly 18 during validation but 19 later, the offset calculation would underflow (18 - 19 = -1 in unsigned arithmetic), wrapping to type(uint8).max = 255. Could this cause the scaling factor to be calculated as 10^255, which would massively overflow and revert, or could it bypass the uint64 validation check due to modular arithmetic?",
    "WERC7575ShareToken tracks rBalances (investment-adjusted balances) alongside regular _balances. The adjustRBalance() function modifies rBalance based on investment profits/losses. If rBalance adjustments are calculated using asset values (with varying decimals 6-18) but stored in 18-decimal precision, and the adjustment calculation does not properly scale by the decimal offset, could an attacker trigger profit/loss events that cause rBalance to diverge from _balances by more than the expected investment return? For example, if a vault has 6-decimal assets and generates 0.01% profit (in 6 decimals), but the rBalance adjustment mistakenly applies this percentage to the 18-decimal share amount without scaling, the rBalance could increase by 10^12x more than intended, allowing unauthorized share minting.",
    "In ERC7575VaultUpgradeable, deposit requests are stored in pendingDepositRequest[receiver] as share amounts (after conversion via _convertToShares). Redeem requests are stored in pendingRedeemRequest[owner] as share amounts directly. When fulfillDepositRequest() is called, it converts the pending shares back to assets via _convertToAssets() to determine how much to transfer, then mints the original pending share amount. If the asset's decimals() value changes between request and fulfillment (e.g., via malicious token upgrade), the scaling factor used in _convertToAssets() would be stale. Could this cause a unit mismatch where the vault transfers an incorrect amount of assets while minting the originally requested shares, breaking the 1:1 asset-share value parity and enabling theft?",
    "ERC7575VaultUpgradeable.initialize() sets minimumDepositAmount = 1000 (line 189) without specifying units. Subsequent deposit validations check `assets >= minimumDepositAmount` where assets are in the asset's native decimals (6-18). For a 6-decimal asset like USDC, 1000 base units = 0.001 USDC, which is a reasonable minimum. But for an 18-decimal asset like DAI, 1000 base units = 0.000000000000001 DAI, effectively no minimum. Could an attacker exploit this by depositing extremely small amounts in 18-decimal assets (e.g., 1001 wei) that bypass minimum checks but create many tiny pending requests, bloating storage and enabling grief attacks via mass cancellations or redemption request spamming?",
    "The _convertToAssets() function uses Math.mulDiv(shares, 1, scalingFactor, rounding) for scalingFactor > 1. When rounding = Floor (favor vault), the division truncates toward zero. For shares < scalingFactor (e.g., shares = 10^11 when scalingFactor = 10^12), the result is 0 assets. If a user has a claimableRedeemRequest of 10^11 shares, calling claimRedeem() would burn their shares but transfer 0 assets, causing total loss of funds. While the protocol likely prevents creating requests below a minimum, could an attacker exploit rounding in batch operations or investment adjustments to reduce a victim's claimable shares just below the scalingFactor threshold, causing their redemption to yield 0 assets?",
    "If the investment layer generates yield that is distributed by adjusting rBalances, and the yield percentage is calculated using asset values (6-18 decimals) but applied to share balances (18 decimals), small rounding errors could compound over time. For example, if a vault with 6-decimal assets generates 0.01% daily yield, and this is applied to shares by multiplying by (1 + 0.0001), the multiplication introduces rounding in the least significant digits. Over 365 days, could these rounding errors accumulate to a >0.1% discrepancy between actual asset value and share value, enabling an attacker who deposits at day 0 and withdraws at day 365 to extract the accumulated rounding profit?",
    "DecimalConstants.SHARE_TOKEN_DECIMALS = 18 enforces that all share tokens have 18 decimals, regardless of underlying asset. If two vaults (Vault A with 6-decimal USDC, Vault B with 18-decimal DAI) both mint shares to the same ShareToken instance, and a user deposits 1 USDC (1e6) in Vault A to receive 1e18 shares, then deposits 1 DAI (1e18) in Vault B to receive 1e18 shares, both deposits yield the same share amount despite representing vastly different asset values (assuming 1 USDC ≈ 1 DAI). However, the asset-to-vault registry enforces one-to-one mapping, preventing this scenario. But could an attacker exploit edge cases in vault registration or de-registration to temporarily create a state where shares from different decimal assets are fungible, enabling value extraction?",
    "DecimalConstants.sol is imported by multiple contracts (WERC7575ShareToken, ShareTokenUpgradeable, ERC7575VaultUpgradeable, WERC7575Vault). If the DecimalConstants library is ever recompiled with different constant values (e.g., MIN_ASSET_DECIMALS changed to 8), and only some contracts are redeployed with the new version while others use the old version, could this create a state where different contracts enforce different decimal rules? For example, ShareToken might enforce 18 decimals while a vault expects assets with min 8 decimals, causing initialization failures or allowing deployment of incompatible vaults that bypass the validation.",
    "In _convertToShares(), the multiplication `assets * scalingFactor` is performed inside Math.mulDiv. For assets approaching type(uint256).max and scalingFactor = 10^12 (MIN_ASSET_DECIMALS case), the product could overflow uint256. While Math.mulDiv is designed to handle this via phantom overflow protection, if the implementation has any bugs or edge cases (e.g., when denominator = 1), could an attacker craft an input that causes unexpected overflow behavior, reverting deposit transactions or returning incorrect share amounts that violate the conversion accuracy invariant?",
    "ERC7575VaultUpgradeable validates asset decimals in initialize() by calling IERC20Metadata(asset).decimals(). If the asset is a proxy contract whose implementation can be upgraded, an attacker could deploy the asset with decimals() = 8 (valid) during vault initialization, then upgrade the asset's implementation to return decimals() = 5 (below MIN_ASSET_DECIMALS). The vault's stored scaling factor would still be based on 8 decimals (10^10), but subsequent decimals() calls would return 5. If any vault logic re-queries decimals() and uses it in calculations, could this create a mismatch that breaks conversions and enables asset theft?",
    "WERC7575ShareToken.constructor() (line 165) validates `decimals() != SHARE_TOKEN_DECIMALS` and reverts with WrongDecimals(). The decimals() function is inherited from OpenZeppelin's ERC20, which returns a constant uint8 = 18 by default. If an attacker creates a malicious ShareToken that overrides decimals() to return a dynamic value (e.g., reading from storage that can be modified post-deployment), could this bypass the constant enforcement? For example, deploying with decimals() = 18, passing validation, then modifying storage to make decimals() return 6 later, causing all share operations to use 6 decimals while vaults expect 18, breaking the entire decimal normalization system?",
    "DecimalConstants.SHARE_TOKEN_DECIMALS and MIN_ASSET_DECIMALS are Solidity constants, making them compile-time immutable. If the protocol needs to support a new class of assets (e.g., tokens with 24 decimals or synthetic tokens with dynamic decimals), the only way to update these constants is to deploy entirely new contracts. If such an update is performed, but the asset-to-vault registry in WERC7575ShareToken is not migrated (because it's stored in the old ShareToken instance), could this create a fragmented protocol state where old vaults use old constants and new vaults use new constants, allowing cross-vault exploits via share transfers between the two systems?SafeTokenTransfers.safeTransferFrom() (line 63) calls IERC20Metadata(token).safeTransferFrom() followed by a balance check. If the token implements ERC777 hooks (tokensReceived) or ERC1363 (onTransferReceived), can a malicious recipient reenter the calling vault contract during the safeTransferFrom() call but before the balance validation check, potentially manipulating state variables like $.pendingDepositAssets or $.totalPendingDepositAssets in ERC7575VaultUpgradeable.requestDeposit() to bypass accounting invariants?",
    "In SafeTokenTransfers.safeTransfer() (line 49), the library reads the recipient's balance before the transfer at line 50, then calls safeTransfer() at line 51, then reads the balance again at line 52. If the token contract has a callback hook that allows the recipient to call back into the vault during the transfer, could an attacker exploit the time-of-check-time-of-use (TOCTOU) window between the two balanceOf() calls to manipulate the balance validation and bypass the TransferAmountMismatch check?",
    "When SafeTokenTransfers.safeTransferFrom() is called from ERC7575VaultUpgradeable.requestDeposit() (line 361), the function is protected by nonReentrant modifier. However, if the asset token implements ERC777 with tokensToSend() hook on the sender side, can the owner trigger a reentrancy attack during the balance deduction phase (before the actual transfer) to call requestDeposit() again with the same assets, causing double-crediting in $.pendingDepositAssets before any revert occurs?",
    "SafeTokenTransfers.safeTransfer() (line 49) performs a balance check after the transfer at line 52. If the asset token contract uses a proxied implementation that can be upgraded to include a malicious transferFrom() hook, could an attacker wait until after deployment, upgrade the token to add a callback that manipulates the vault's state during the balance check window, then exploit this to drain funds by manipulating $.claimableRedeemAssets or $.claimableDepositShares?",
    "In ERC7575VaultUpgradeable.claimDeposit() (line 915-916), SafeTokenTransfers.safeTransfer() is called AFTER burning shares and emitting the Withdraw event. If the asset token has a transfer callback that allows reentrancy, can an attacker reenter claimDeposit() during the transfer to claim the same assets multiple times before the balance check at line 53 of SafeTokenTransfers.sol completes, violating the no-double-claim invariant?",
    "SafeTokenTransfers.safeTransferFrom() (line 63) validates that balanceAfter == balanceBefore + amount at line 67. If the recipient address is a contract that implements a receive() or fallback() function which calls token.burn() on itself during the transfer callback, could the balance check pass (because burn reduces balance) while the vault's accounting assumes full amount was received, leading to an accounting mismatch where $.totalPendingDepositAssets exceeds actual held assets?",
    "In SafeTokenTransfers.safeTransfer() (line 49-54), the balance validation check assumes balanceAfter = balanceBefore + amount. If the asset token implements an automatic rebase mechanism (like Ampleforth) where balances change automatically between the two balanceOf() calls at lines 50 and 52, could a positive rebase cause the check to pass even if the actual transfer amount was less than requested, or could a negative rebase cause spurious TransferAmountMismatch reverts that DOS valid withdrawals?",
    "SafeTokenTransfers.safeTransferFrom() checks recipient balance at line 64 and 66. If the recipient address is a smart contract wallet that implements token forwarding (automatically forwarding received tokens to another address via transferFrom in the same transaction), could the balance check at line 67 fail even for legitimate transfers because the recipient's balance didn't increase by the expected amount, causing DOS for valid deposit requests?",
    "In SafeTokenTransfers.safeTransfer() (line 51), if the asset token contract is a proxy with a malicious implementation that returns manipulated values from balanceOf() calls, could an attacker bypass the balance validation check at line 53 by making balanceOf(recipient) return (balanceBefore + amount) at line 52 even though the actual transfer didn't occur, allowing the vault to credit shares without receiving assets?",
    "SafeTokenTransfers.safeTransferFrom() (line 67) performs strict equality check: balanceAfter != balanceBefore + amount. If the asset token has an edge case where dust amounts (1-2 wei) are automatically transferred to a fee address during large transfers, could legitimate large deposits from institutional users fail with TransferAmountMismatch even though the actual value loss is negligible, causing DOS for high-value deposit requests that exceed $.minimumDepositAmount?",
    "In SafeTokenTransfers.safeTransfer() line 53, the check 'balanceAfter != balanceBefore + amount' involves unchecked addition. If balanceBefore is close to type(uint256).max and amount is large, could the addition overflow (wrapping to a small value), causing the check to pass even though balanceAfter is actually less than expected, allowing the vault to send more assets than it has available and breaking the totalAssets() accounting invariant?",
    "SafeTokenTransfers.safeTransferFrom() (line 67) checks balanceAfter != balanceBefore + amount. If the asset token uses a custom decimal representation where balances are stored in a different unit than what balanceOf() returns, and the conversion causes integer overflow during the addition operation, could this bypass the validation check and allow fee-on-transfer tokens to be incorrectly accepted, violating the documented incompatibility with such tokens?",
    "In SafeTokenTransfers.safeTransferFrom() (line 63), if sender == recipient, the balance check at line 67 expects balanceAfter == balanceBefore + amount. However, if the token contract implements internal logic that doesn't modify balances for self-transfers (balance stays same), would the check incorrectly revert with TransferAmountMismatch for legitimate same-address transfers, potentially breaking batch settlement netting operations where a user appears as both sender and recipient?",
    "SafeTokenTransfers.safeTransfer() (line 49) checks recipient balance before and after. If recipient == address(this) (transferring to self), and the token implementation short-circuits self-transfers without changing balance, could this cause spurious TransferAmountMismatch reverts during claimCancelDepositRequest() (line 1707) or claimCancelRedeemRequest() (line 1881) if the vault is accidentally set as receiver, causing DOS for cancellation claims?",
    "In SafeTokenTransfers.safeTransferFrom() (line 63-67), if sender == address(this) == recipient (vault transferring to itself), the balance validation expects net increase of amount. But if the token implementation recognizes this as a no-op and doesn't emit Transfer event or modify balances, could this break the async deposit/redeem flow assumptions in ERC7575VaultUpgradeable where the vault expects exact balance changes for accounting purposes?",
    "SafeTokenTransfers.safeTransferFrom() (line 63) doesn't validate that amount > 0 before calling safeTransferFrom(). If amount == 0, some ERC20 implementations may not emit Transfer events or may behave unexpectedly. Could a malicious user call requestDeposit() with assets that round down to 0 after decimal conversion, causing SafeTokenTransfers to pass validation but the vault to credit 0 shares, creating a DOS vector where $.activeDepositRequesters grows unbounded with zero-value requests?",
    "In SafeTokenTransfers.safeTransfer() (line 49), if amount == 0, the balance check at line 53 will always pass (balanceAfter == balanceBefore). Could an attacker exploit this in the async redeem flow by requesting a redemption that converts to 0 assets after fulfillment (due to rounding), then call claimRedeem() to trigger SafeTokenTransfers.safeTransfer() with 0 amount, bypassing the ZeroAssets validation in the claim function and potentially manipulating $.totalClaimableRedeemAssets accounting?",
    "SafeTokenTransfers.safeTransferFrom() (line 65) calls balanceOf() on the token contract after the transfer. If the asset token implements a malicious balanceOf() function that consumes excessive gas (e.g., by reading from unbounded storage), could an attacker deploy such a token, register it with the vault system (if possible), and cause all deposit requests to run out of gas during the balance validation check, effectively DOS-ing the entire deposit flow?",
    "In SafeTokenTransfers.safeTransfer() (line 50, 52), two balanceOf() calls are made per transfer. If the asset token contract has a gas-intensive balanceOf() implementation (e.g., iterating through holders or computing balances on-chain), could this cause claims in ERC7575VaultUpgradeable.claimRedeem() (line 916) or claimCancelDepositRequest() (line 1707) to consistently fail due to block gas limit, trapping user funds in claimable state permanently?",
    "SafeTokenTransfers.safeTransferFrom() (line 63) trusts the token contract's balanceOf() and safeTransferFrom() implementations. If the asset token is a proxy with an upgradeable implementation, could the token owner upgrade to a malicious implementation that manipulates balanceOf() return values to always return (balanceBefore + amount) at line 66, allowing the vault to credit shares without actually receiving assets, enabling the token owner to drain vault reserves?",
    "In SafeTokenTransfers.safeTransfer() (line 51), if the asset token contract is a malicious implementation that allows the token owner to arbitrarily modify user balances via an admin function, could the token owner front-run a claimRedeem() transaction by artificially increasing the recipient's balance just before the post-transfer balance check, causing the check to pass even though the vault never sent tokens, resulting in double-spending where both the recipient and the vault believe they own the assets?",
    "SafeTokenTransfers.safeTransferFrom() (line 64-66) reads recipient balance twice. If the asset token implements a malicious balanceOf() that returns different values on subsequent calls (stateful randomness), could this cause non-deterministic behavior where the same transfer sometimes passes and sometimes reverts with TransferAmountMismatch, creating a DOS vector for deposits where users must retry multiple times with increasing gas costs?",
    "In ERC7575VaultUpgradeable.requestDeposit() (line 361), SafeTokenTransfers.safeTransferFrom() is called BEFORE updating $.pendingDepositAssets (line 364). This follows Pull-Then-Credit pattern. However, if the token has a callback hook that allows the owner to call cancelDepositRequest() during the transfer, could the owner cancel the deposit request before the assets are credited to $.pendingDepositAssets, then re-request with the same assets, causing the vault to accept double deposits from the same assets?",
    "SafeTokenTransfers.safeTransfer() is called in claimRedeem() after burning shares (line 912-916). If the asset token has a callback that allows reentrancy back into requestDeposit() during the transfer, could an attacker claim redeemed assets (reducing $.totalClaimableRedeemAssets), immediately re-deposit them (increasing $.totalPendingDepositAssets), and repeat this cycle to manipulate the reserved asset calculation (reservedAssets = pending + claimable) to exceed actual vault holdings?",
    "In ERC7575VaultUpgradeable.fulfillDepositRequest() (line 558-590), the Investment Manager calls this to convert pending deposits to claimable shares. However, this function doesn't directly call SafeTokenTransfers. If an attacker front-runs the fulfillment transaction with a large deposit via requestDeposit() (which uses SafeTokenTransfers.safeTransferFrom at line 361), could the sudden balance increase cause the fulfillment's share calculation to use inflated totalAssets(), minting more shares than intended and diluting existing shareholders?",
    "SafeTokenTransfers.safeTransfer() is used in claimCancelDepositRequest() (line 1707). If the asset token has a transfer callback that allows the owner to call requestDeposit() during the cancellation claim transfer, could the owner immediately re-deposit the cancelled assets, creating a situation where $.totalPendingDepositAssets + $.totalCancelDepositAssets counts the same assets twice, breaking the reserved asset calculation and allowing over-investment beyond safe limits?",
    "SafeTokenTransfers.safeTransferFrom() is used to pull assets in requestDeposit() (line 361). The vault then tracks these assets in $.pendingDepositAssets which contributes to reservedAssets calculation. If an attacker deposits a large amount triggering SafeTokenTransfers, then the Investment Manager calls investAssets() to move funds to the investment vault, could a race condition exist where the balance check in SafeTokenTransfers validates against the vault's balance BEFORE investAssets() executes, allowing the same assets to be double-counted in both $.pendingDepositAssets and $.investedAssets?",
    "In investAssets() (line 1530), the vault transfers assets to the investment vault using SafeERC20.safeTransfer (not SafeTokenTransfers). However, when users deposit via requestDeposit(), SafeTokenTransfers.safeTransferFrom() is used. If the investment vault's address is malicious and implements a receive hook that manipulates balances, could there be an inconsistency where deposits are validated with strict balance checks but investments are not, allowing the investment vault to extract more value than accounted for?",
    "SafeTokenTransfers ensures exact transfer amounts, but the investment vault integration (lines 1530-1547) uses a different transfer mechanism. If the investment vault implements a yield-bearing token that automatically increases balances over time (like aTokens), could the reserved asset calculation break because SafeTokenTransfers validated exact amounts during deposit, but when withdrawFromInvestment() is called, the vault receives more assets than expected, causing $.investedAssets underflow or $.totalAssets overflow?",
    "WERC7575ShareToken.batchTransfers() (lines 680-750) performs batch settlement netting but doesn't use SafeTokenTransfers for share token movements. However, when users claim their deposits after fulfillment, SafeTokenTransfers.safeTransfer() is used for the underlying asset. If a user participates in a batch settlement that nets to receiving shares, then immediately claims a pending redeem using those shares, could the strict balance validation in SafeTokenTransfers cause unexpected reverts if the share token's balance hasn't properly settled due to batch netting timing?",
    "SafeTokenTransfers.safeTransferFrom() (line 63) validates exact amounts. If a user's deposit request is fulfilled via fulfillDepositRequest(), granting claimable shares, but the user is simultaneously participating in a batch settlement operation that adjusts their share balance via _rBalances modifications, could there be a race condition where the claim operation using SafeTokenTransfers fails because the balance validation expects a different starting balance than what batch netting produced?",
    "SafeTokenTransfers.safeTransferFrom() (line 67) performs strict equality check for balance changes. ERC7575VaultUpgradeable uses decimal offset calculations (10^(18 - assetDecimals)) to normalize shares to 18 decimals. If an asset has 6 decimals (like USDC), and a user deposits an amount that causes precision loss during share calculation, could the subsequent transfer validation fail because the actual asset amount transferred (before conversion) doesn't match the reconverted amount expected by the vault's accounting?",
    "In WERC7575Vault.deposit() (line 332), assets are transferred using SafeTokenTransfers.safeTransferFrom(), then shares are minted. The shares are calculated as (assets * $.decimalOffset) where decimalOffset = 10^(18 - assetDecimals). If assets * decimalOffset overflows uint256 for a high-decimal asset, could the transaction revert in the share calculation AFTER SafeTokenTransfers validated the transfer, causing the assets to be stuck in the vault without corresponding shares minted?",
    "SafeTokenTransfers.safeTransfer() validates exact transfer amounts. When claiming redeemed assets in ERC7575VaultUpgradeable.claimRedeem() (line 916), the assets amount is calculated via convertToAssets(shares). If this conversion involves division that truncates small amounts (e.g., shares < 1e18), could the claim attempt to transfer 0 assets, passing SafeTokenTransfers validation but failing to return user funds, effectively locking small redemptions?",
    "SafeTokenTransfers.safeTransferFrom() is used in requestDeposit() to pull assets into the vault. These assets are added to $.pendingDepositAssets which contributes to reservedAssets. If the Investment Manager calls investAssets() to move funds to the investment vault, but the calculation of available assets for investment doesn't account for in-flight transfers (where SafeTokenTransfers has validated the transfer but the state update hasn't completed due to reentrancy), could this allow over-investment beyond the safety threshold (totalAssets - reservedAssets)?",
    "In claimRedeem() (line 915-916), SafeTokenTransfers.safeTransfer() sends assets to the receiver. However, $.totalClaimableRedeemAssets is decremented BEFORE the transfer at line 903. If the transfer fails due to a malicious receiver contract that reverts in its receive() function, could the SafeTokenTransfers validation prevent state rollback, causing $.totalClaimableRedeemAssets to be permanently decremented without assets leaving the vault, breaking the reserved asset invariant?",
    "SafeTokenTransfers is a library with internal functions (lines 49, 63). If the vault contracts using this library (ERC7575VaultUpgradeable, WERC7575Vault) are upgraded via UUPS to a new implementation that replaces SafeTokenTransfers with a different transfer mechanism, could existing pending deposits that were validated with SafeTokenTransfers' strict checks become vulnerable if the new implementation allows fee-on-transfer tokens, enabling an attacker to exploit the transition window to deposit undervalued assets?",
    "SafeTokenTransfers doesn't maintain any storage state. However, it's used within ERC7575VaultUpgradeable which uses ERC-7201 namespaced storage. If the vault is upgraded and the new implementation changes how balances are tracked (e.g., adding a new $.assetBalanceCache variable), could the balance check in SafeTokenTransfers at line 67 become invalid because it reads live balanceOf() but the vault's internal accounting uses the cached value, causing mismatches?",
    "SafeTokenTransfers.safeTransfer() and safeTransferFrom() both validate balances independently. In the async flow, requestDeposit() uses safeTransferFrom() (line 361) and claimRedeem() uses safeTransfer() (line 916). If a user deposits assets, waits for fulfillment, then immediately redeems and claims within the same block, could there be a timing issue where the two SafeTokenTransfers validations interfere with each other due to balance state changes happening between the calls, causing unexpected TransferAmountMismatch reverts?",
    "In ERC7575VaultUpgradeable, both claimRedeem() (line 916) and claimCancelDepositRequest() (line 1707) use SafeTokenTransfers.safeTransfer() to send assets. If a user has both a claimable redemption and a claimable deposit cancellation for the same asset amount, could calling both claim functions in the same transaction cause the second SafeTokenTransfers validation to fail because the vault's asset balance was already reduced by the first claim, even though both claims were legitimate?",
    "SafeTokenTransfers.safeTransferFrom() calls balanceOf() at lines 64 and 66. If the asset token's balanceOf() function is non-view (doesn't follow ERC20 standard) and modifies state, could a malicious token implementation use the balanceOf() call at line 66 to reenter the vault contract and call a view function like pendingDepositRequest(), which reads $.pendingDepositAssets that was just updated at line 364, causing inconsistent state to be returned to external observers?",
    "In SafeTokenTransfers.safeTransfer() (line 52), the second balanceOf() call occurs after the transfer. If this balanceOf() call triggers a callback in the token contract that calls back to read vault state via maxWithdraw() or maxRedeem() view functions, could the reported maximum values be incorrect because they calculate based on totalAssets() which includes the assets that are currently in-flight in the SafeTokenTransfers validation?",
    "SafeTokenTransfers is used by both ERC7575VaultUpgradeable (for underlying assets) and potentially by WERC7575ShareToken (for share transfers in claimCancelRedeemRequest line 1881). If the shareToken is accidentally set to the same address as the asset token, could SafeTokenTransfers balance validation cause double-checking issues where a single transfer is validated twice, or could this enable an attack where the attacker exploits the confusion between asset and share transfers to manipulate accounting?",
    "In a multi-vault deployment where different vaults have different assets, SafeTokenTransfers.safeTransferFrom() is called with different token addresses. If one asset token has a malicious implementation that manipulates SafeTokenTransfers behavior, could this affect the operation of other vaults? For example, if token A's balanceOf() consumes excessive gas, could this DOS all vaults, or is each vault isolated in its SafeTokenTransfers usage?",
    "SafeTokenTransfers.safeTransferFrom() (line 63) uses SafeERC20.safeTransferFrom() internally. If the asset token is a wrapper around another protocol's token (like Wrapped Bitcoin or Wrapped Ether), and the underlying protocol has a paused state, could SafeTokenTransfers fail to detect this pause condition, allowing users to request deposits that appear to succeed (balance check passes) but the underlying value is locked in a paused protocol?",
    "In ERC7575VaultUpgradeable.requestDeposit() (line 361), SafeTokenTransfers.safeTransferFrom() validates the transfer from the user. If the asset token implements a whitelist mechanism (like USDC's blacklist), and the user's address gets blacklisted between the ownerBalance check (line 349) and the actual transfer (line 361), could SafeTokenTransfers validation pass but the vault never receive the assets, causing state corruption in $.pendingDepositAssets?",
    "SafeTokenTransfers.safeTransfer() (line 53) checks if balanceAfter != balanceBefore + amount. If amount == type(uint256).max and balanceBefore > 0, the addition would overflow in Solidity <0.8.0. Since this contract uses ^0.8.30 with overflow protection, the addition would revert. However, could a malicious token contract return type(uint256).max from balanceOf() at line 50, causing the addition to revert not with TransferAmountMismatch but with overflow error, hiding the actual issue?",
    "In SafeTokenTransfers.safeTransferFrom() (line 67), if the asset token implements a maximum balance limit per address (like some regulatory compliance tokens), and the recipient is already at the limit, could the transfer partially succeed (transferring only up to the limit) while the balance check expects the full amount, causing TransferAmountMismatch revert that DOS all deposits for addresses near their balance limit?",
    "SafeTokenTransfers.safeTransfer() reads recipient balance at line 50 before transfer. If the recipient is a contract that self-destructs during the transfer callback (via ERC777 hook), causing all its balance to be sent to a beneficiary, could the balance check at line 53 fail even though the transfer technically succeeded, creating a permanent DOS for withdrawals to certain recipient addresses?",
    "SafeTokenTransfers uses IERC20Metadata interface (line 4). If the asset token implements ERC1363 payable token standard with transferAndCall(), and a user attempts a deposit, could the regular transfer() call in SafeTransfer work but the balance validation fail if the token's transferAndCall() implementation has different balance adjustment logic than standard transfer()?",
    "SafeTokenTransfers.safeTransferFrom() assumes standard ERC20 behavior. If the asset token implements ERC4626 vault token standard (yield-bearing), where share balances are computed dynamically from underlying assets, could the balance check at line 67 fail intermittently as the exchange rate changes between the two balanceOf() calls at lines 64 and 66, causing non-deterministic failures for deposits?",
    "In SafeTokenTransfers.safeTransfer() (line 51), if the asset token implements permit() (EIP-2612) and uses a non-standard approval mechanism where transferFrom() can succeed without prior approve(), could this affect the balance validation if the token's transfer logic differs between transfer() and transferFrom() paths, potentially allowing bypass of the strict amount verification?",
    "SafeTokenTransfers.safeTransferFrom() validates transfers at the token contract level (balanceOf checks). However, ERC7575VaultUpgradeable maintains its own accounting state in $.pendingDepositAssets and $.totalPendingDepositAssets. If a contract upgrade introduces a bug where these state variables don't match actual token balances held by the vault, could SafeTokenTransfers continue passing validation while the vault's internal accounting diverges, eventually causing insolvency?",
    "In the async deposit flow, SafeTokenTransfers.safeTransferFrom() is called in requestDeposit() (line 361), but the actual share minting happens later in fulfillDepositRequest(). If the vault's totalAssets() calculation (which affects conversion rates) includes assets from completed SafeTokenTransfers but not yet fulfilled requests, could this create a window where an attacker can exploit the accounting mismatch to mint shares at a manipulated rate?",
    "WERC7575ShareToken.permit() validates EIP-712 signatures and checks if owner == spender, requiring validator signature for self-approvals. If a malicious KYC-verified user creates a permit signature where owner != spender but the spender is a contract they control, can they bypass the validator signature requirement and gain unauthorized self-allowance to enable transfers without proper authorization?",
    "In WERC7575ShareToken.permit() (lines 396-429), the function uses _useNonce(owner) to increment nonces and prevent replay attacks. If an attacker front-runs a legitimate permit() call with the same nonce and parameters but a different spender address, can they consume the nonce and cause the victim's transaction to revert, effectively denying service to permit-based approvals?",
    "WERC7575ShareToken.permit() allows self-approvals (owner == spender) only with validator signatures. If the DOMAIN_SEPARATOR used in _hashTypedDataV4() is not chain-specific or can be manipulated across forks, can an attacker replay a valid validator-signed permit from a testnet to grant unauthorized self-allowances on mainnet?",
    "In WERC7575ShareToken.permit(), if the deadline parameter is set to type(uint256).max, the signature remains valid indefinitely. Can an attacker who obtains a validator-signed permit signature (e.g., from a compromised database or social engineering) use it months later to grant self-allowance even after the original authorization context has expired?",
    "WERC7575ShareToken.transfer() requires _spendAllowance(from, from, value) for self-allowance before transferring. If a user has self-allowance but their KYC status is revoked between the allowance check and the actual transfer, can they bypass KYC enforcement by exploiting the order of checks in the transfer() function?",
    "In WERC7575ShareToken.transferFrom() (lines 488-492), the function spends self-allowance from the 'from' address: _spendAllowance(from, from, value). If 'from' has insufficient self-allowance but msg.sender has sufficient allowance[from][msg.sender], will the transaction revert before checking the caller's allowance, or can an attacker exploit this to manipulate the order of allowance deductions?",
    "WERC7575ShareToken.approve() blocks self-approval (msg.sender == spender) and reverts with ERC20InvalidSpender. If a user accidentally tries to self-approve through a smart contract wallet that batch-calls approve(), can this cause the entire batch transaction to revert, leading to a DOS scenario where legitimate approvals cannot be set?",
    "In WERC7575ShareToken.batchTransfers() (lines 700-734), the function uses consolidateTransfers() to net debits and credits per account before updating _balances. If an attacker submits a batch where the same account appears as both debtor and creditor with amounts that net to zero, but the gross debit exceeds their balance, can they bypass the LowBalance check and manipulate other accounts' balances through the netting logic?",
    "WERC7575ShareToken.batchTransfers() emits Transfer events for the original transfers (lines 726-731), not the consolidated net transfers. If the consolidation logic in consolidateTransfers() contains a bug that miscalculates net amounts, can an attacker exploit the mismatch between emitted events and actual balance changes to confuse off-chain indexers and create phantom balances?",
    "In WERC7575ShareToken.consolidateTransfers() (lines 1006-1062), self-transfers are skipped (debtor == creditor). If an attacker includes self-transfers in a batch to inflate the apparent transfer count while consuming minimal gas, can they use this to exceed the MAX_BATCH_SIZE limit without actually processing 100 meaningful transfers, potentially bypassing batch size restrictions?",
    "WERC7575ShareToken.batchTransfers() does not use nonReentrant modifier, relying on the fact that it makes no external calls. However, if the _balances mapping update (lines 704-718) is not atomic and another validator can call batchTransfers() simultaneously, can race conditions between concurrent batch operations corrupt account balances or violate the zero-sum invariant?",
    "In WERC7575ShareToken.batchTransfers(), the consolidateTransfers() function aggregates accounts using a nested loop (O(N²) complexity). If the validator submits exactly 100 transfers with 200 unique addresses (worst case: no overlap between debtors and creditors), can the gas consumption exceed block limits and cause the transaction to revert, effectively DOSing batch settlement operations?",
    "WERC7575ShareToken.batchTransfers() checks debtorBalance < amount and reverts with LowBalance (line 709). If the batch contains transfers that reduce an account's balance in early transfers and then try to debit from the same account later in the batch, will the later debit fail because the earlier deductions already reduced the balance below the required amount?",
    "In WERC7575ShareToken.rBatchTransfers() (lines 1119-1202), the function updates _rBalances based on rBalanceFlags bitmap. If the computeRBalanceFlags() function (lines 802-963) returns incorrect flags due to account aggregation order mismatch, can an attacker cause _rBalances to be updated for the wrong accounts, leading to incorrect investment tracking and potential profit/loss misattribution?",
    "WERC7575ShareToken.rBatchTransfers() updates _rBalances for debtors by adding the net debit (lines 1148-1153) and for creditors by subtracting the net credit (lines 1166-1178). If an account's _rBalances[account] is less than the credit amount, it gets capped at 0 (lines 1170-1177). Can an attacker exploit this capping behavior to manipulate rBalance tracking by repeatedly crediting and debiting the same account in different batches?",
    "In WERC7575ShareToken.computeRBalanceFlags() (lines 802-963), if an account appears in multiple transfers with inconsistent rBalance flags (e.g., marked for update in transfer 0 but not in transfer 5), the function reverts with InconsistentRAccounts (lines 892-893, 916-917). Can an attacker cause legitimate batch operations to fail by intentionally submitting inconsistent flags, effectively DOSing the rBatchTransfers functionality?",
    "WERC7575ShareToken.rBatchTransfers() uses rBalanceFlags as a bitmap where bit i corresponds to accounts[i] in the consolidated array. If the validator accidentally provides rBalanceFlags computed for a different set of transfers (wrong debtors/creditors/amounts), can this cause _rBalances to be updated for entirely different accounts than intended, corrupting investment tracking across the protocol?",
    "WERC7575ShareToken.adjustrBalance() (lines 1435-1471) allows the revenue admin to adjust _rBalances based on investment performance. If amountr > amounti (profit case), _rBalances[account] increases without any corresponding increase in _balances[account]. Can this create a scenario where sum(_rBalances) > sum(_balances), violating the invariant that rBalance tracks a subset of actual balances?",
    "In WERC7575ShareToken.adjustrBalance(), if amountr < amounti (loss case) and _rBalances[account] < difference, the function reverts with RBalanceAdjustmentTooLarge (lines 1459-1463). However, if the revenue admin applies multiple small adjustments that cumulatively exceed the available rBalance, can they work around this check by breaking a large loss into smaller increments?",
    "WERC7575ShareToken.adjustrBalance() stores adjustments in _rBalanceAdjustments[account][ts] and checks if [ts][0] != 0 to prevent duplicate adjustments (lines 1436-1438). If the revenue admin accidentally uses the same timestamp for different accounts, can this cause the second adjustment to revert even though it's for a different account, potentially blocking legitimate rBalance updates?",
    "WERC7575ShareToken.cancelrBalanceAdjustment() (lines 1485-1514) reverses a previous adjustment by applying the opposite operation. If an adjustment has already been partially offset by subsequent batch transfers that modified _rBalances[account], can canceling the adjustment create an inconsistent state where the rBalance no longer reflects the actual investment position?",
    "In WERC7575ShareToken.adjustrBalance(), if amounti > type(uint256).max / MAX_RETURN_MULTIPLIER, the function reverts with AmountTooLarge (lines 1442-1444). However, if the revenue admin makes multiple sequential adjustments with slightly smaller amounts that collectively exceed the safe limit, can they bypass this overflow protection and cause amountr calculation to overflow when summed across all adjustments?",
    "WERC7575ShareToken.mint() checks isKycVerified[to] before minting (line 367). If the KYC admin revokes a user's KYC status after they have already received shares through minting but before they can transfer them, will the shares become permanently locked in their account since transfer() also requires KYC verification for the recipient?",
    "WERC7575ShareToken.burn() checks isKycVerified[from] before burning (line 380). If a user's KYC status is revoked, can they still call redeem operations through vaults that would trigger burn(), or will the burn fail and prevent them from exiting their position entirely, leading to permanent fund lock?",
    "In WERC7575ShareToken.transfer() and transferFrom() (lines 472-492), KYC is checked for the 'to' address but not explicitly re-checked for the 'from' address. If a user's KYC status is revoked, can they still call transfer() to send their shares to a KYC-verified recipient, potentially violating the intent that non-KYC users should have no token operations?",
    "WERC7575ShareToken.setKycVerified() only emits an event if the status actually changes (lines 298-300). If the KYC admin calls setKycVerified(user, true) multiple times, only the first call emits an event. Can this event deduplication cause off-chain systems to miss re-verification events if they rely on event counts to track KYC renewal frequency?",
    "WERC7575ShareToken.registerVault() (lines 218-241) validates that vault.asset() matches the provided asset parameter and vault.share() matches this ShareToken. If a malicious vault contract implements these view functions correctly during registration but changes their return values afterward, can the registered vault bypass these invariants and mint shares for the wrong asset?",
    "In WERC7575ShareToken.registerVault(), the function enforces MAX_VAULTS_PER_SHARE_TOKEN = 10 to prevent unbounded loops in aggregation (lines 232-234). If all 10 vault slots are filled and the owner needs to register a new vault for a critical asset, can they only do so by first unregistering an existing vault, potentially disrupting ongoing operations for users of the removed vault?",
    "WERC7575ShareToken.unregisterVault() (lines 256-285) checks that vault.totalAssets() == 0 and asset.balanceOf(vault) == 0 before allowing unregistration (lines 265-279). If assets are stuck in the vault due to a bug in the vault's withdrawal logic, can this permanently prevent vault unregistration, leaving a broken vault registered in the system indefinitely?",
    "In WERC7575ShareToken.unregisterVault(), if the vault contract is malicious and deliberately returns non-zero values for totalAssets() even when all user funds are withdrawn, can this prevent unregistration and lock the vault in the registry permanently, potentially blocking registration of a new vault for that asset?",
    "WERC7575ShareToken.mint() and burn() use the onlyVaults modifier to check vaultToAsset[msg.sender] != address(0) (lines 127-131, 363, 376). If a vault is unregistered while users have pending async operations (deposit/redeem requests), can the vault still call mint/burn to fulfill those requests, or will they fail due to the vault no longer being registered?",
    "ShareTokenUpgradeable.setOperator() (lines 480-486) allows any user to approve an operator without additional authorization checks. If a user is socially engineered into calling setOperator(malicious_address, true), can the malicious operator then call requestDeposit() or requestRedeem() on behalf of the user, potentially draining their funds through unauthorized async operations?",
    "ShareTokenUpgradeable.setOperatorFor() (lines 525-530) can only be called by registered vaults and sets operator approval on behalf of a controller. If a malicious vault calls setOperatorFor(victim, attacker, true), can the attacker gain operator privileges over the victim's async requests without the victim's explicit consent?",
    "In ShareTokenUpgradeable.setOperator(), the function reverts if msg.sender == operator with CannotSetSelfAsOperator (line 481). If a user wants to give themselves operator privileges (e.g., for a multi-sig setup), can they bypass this by deploying a proxy contract that calls setOperator on their behalf, potentially creating unintended operator relationships?",
    "ERC7575VaultUpgradeable.requestDeposit() (lines 341-371) transfers assets using SafeTokenTransfers.safeTransferFrom() before updating state (line 361). If the asset token is a non-standard ERC20 that calls back into the contract during transfer, can an attacker re-enter requestDeposit() and submit multiple deposit requests with the same assets, inflating totalPendingDepositAssets beyond the actual transferred amount?",
    "In ERC7575VaultUpgradeable.requestDeposit(), the function checks if controller has a pending deposit cancelation (lines 354-356) and reverts with DepositCancelationPending. If a user has both a pending cancelation and claimable canceled assets, can they be permanently blocked from making new deposits because the cancelation flag is never cleared until claimCancelDepositRequest() is called?",
    "ERC7575VaultUpgradeable.fulfillDeposit() (lines 425-445) converts assets to shares using _convertToShares() with Floor rounding (line 433). If the conversion results in 0 shares due to very small asset amounts or unfavorable exchange rates, the function reverts with ZeroShares (line 434). Can an attacker submit many tiny deposit requests that the investment manager cannot fulfill, forcing them to skip those requests and causing a backlog of unfulfillable deposits?",
    "In ERC7575VaultUpgradeable.fulfillDeposit(), shares are minted to the vault contract (line 442) and held until the user claims them via deposit() or mint(). If the investment manager fulfills deposits but users never claim their shares, can this cause an accumulation of shares in the vault balance, potentially affecting totalSupply calculations in the ShareToken?",
    "ERC7575VaultUpgradeable.fulfillDeposits() (lines 453-484) batch-processes multiple deposit fulfillments. If one fulfillment in the middle of the batch reverts (e.g., ZeroShares or InsufficientBalance), does the entire batch revert, requiring the investment manager to manually split the batch and retry, causing inefficiency in fulfillment operations?",
    "ERC7575VaultUpgradeable.deposit() (lines 557-589) calculates shares proportionally using assets.mulDiv(availableShares, availableAssets, Floor) (line 570). If availableAssets is very small and availableShares is large (high share price), can rounding down cause the user to receive significantly fewer shares than expected, leading to value leakage that accumulates in the vault?",
    "In ERC7575VaultUpgradeable.deposit(), if availableAssets == assets (user claiming all their claimable assets), the function deletes both claimableDepositShares and claimableDepositAssets (lines 574-577). If the user had dust amounts due to rounding in fulfillDeposit(), can this deletion cause them to permanently lose the dust shares that remain in the vault's balance?",
    "ERC7575VaultUpgradeable.mint() (lines 633-665) calculates assets proportionally using shares.mulDiv(availableAssets, availableShares, Floor) (line 646). If a user tries to mint exactly their availableShares but the calculation results in assets < availableAssets due to rounding, will the remaining asset dust be locked in the claimable mapping forever since the user is removed from activeDepositRequesters?",
    "In ERC7575VaultUpgradeable.deposit() and mint(), the functions transfer shares from the vault to the receiver using IERC20Metadata(shareToken).transfer() (lines 586-588, 662-664). If the ShareToken's transfer function reverts (e.g., due to KYC checks or self-allowance requirements), can users be unable to claim their fulfilled deposits despite having valid claimable amounts?",
    "ERC7575VaultUpgradeable.requestRedeem() (lines 715-751) transfers shares from owner to vault using ShareTokenUpgradeable(shareToken).vaultTransferFrom() (line 740). If the ShareToken's vaultTransferFrom bypasses allowance checks (as intended), can a malicious operator who is approved via setOperator() call requestRedeem() on behalf of a user without their shares having self-allowance, effectively stealing shares into the vault?",
    "In ERC7575VaultUpgradeable.requestRedeem(), the function checks if controller has a pending redeem cancelation (lines 734-736) and reverts with RedeemCancelationPending. Can this create a situation where a user with claimable canceled shares is unable to make new redeem requests until they claim their cancelation, causing operational friction and potential fund locking?",
    "ERC7575VaultUpgradeable.requestRedeem() uses both operator and ERC20 allowance authorization (lines 723-726). If owner approves msg.sender via ERC20 allowance but not via setOperator(), does the function correctly fall through to spendAllowance(), or can the operator check short-circuit and cause the transaction to revert unexpectedly?",
    "ERC7575VaultUpgradeable.fulfillRedeem() (lines 822-841) converts shares to assets and stores them in claimableRedeemAssets (line 834) but does NOT burn the shares immediately (line 839 comment). If the shares remain in the vault until redeem() is called, can this cause totalClaimableRedeemShares to accumulate and affect the circulating supply calculations in ShareToken.getCirculatingSupplyAndAssets()?",
    "In ERC7575VaultUpgradeable.fulfillRedeem(), the function updates totalClaimableRedeemAssets += assets (line 836) without checking if this exceeds totalAssets(). If the investment manager fulfills redemptions for more assets than are available in the vault, can this cause claimableRedeemAssets to exceed the vault's actual asset balance, leading to failed redeem claims later?",
    "ERC7575VaultUpgradeable.redeem() (lines 885-918) calculates proportional assets using shares.mulDiv(availableAssets, availableShares, Floor) (line 897). If availableShares is very small due to partial claims, can rounding errors cause the user to receive significantly fewer assets than their shares are worth, with the difference accumulating as unclaimed assets in the vault?",
    "In ERC7575VaultUpgradeable.redeem(), shares are burned from the vault after calculating assets (line 912). If the burn fails for any reason (e.g., ShareToken paused or vault authorization revoked), can the function still transfer assets to the user in line 916, creating a scenario where assets are withdrawn without burning the corresponding shares?",
    "ERC7575VaultUpgradeable.withdraw() (lines 927-962) calculates proportional shares using assets.mulDiv(availableShares, availableAssets, Floor) (line 939). If the user requests exactly availableAssets but shares round down to 0 due to very small amounts, does the function revert or successfully withdraw assets without burning any shares, violating the shares-assets correspondence?",
    "In ERC7575VaultUpgradeable.redeem() and withdraw(), if assets == 0 after calculation but shares > 0 (or vice versa), can the user claim one side of the trade without the corresponding deduction on the other side, creating an accounting mismatch in totalClaimableRedeemAssets vs totalClaimableRedeemShares?",
    "ERC7575VaultUpgradeable.totalAssets() (lines 1174-1180) excludes totalPendingDepositAssets, totalClaimableRedeemAssets, and totalCancelDepositAssets from the vault's balance (line 1178). If an attacker can manipulate any of these reserved amounts to exceed the actual vault balance, can they cause totalAssets() to return 0 or underflow, breaking conversion rate calculations and preventing legitimate deposits/redeems?",
    "In ERC7575VaultUpgradeable.totalAssets(), if balance < reservedAssets, the function returns 0 (line 1179). Can this cause _convertToShares() to divide by zero or return incorrect conversion rates when totalAssets() is 0 but shares are circulating, leading to failed deposit/redeem operations or exploitable arbitrage?",
    "ERC7575VaultUpgradeable.totalAssets() does not include invested assets (assets deployed to investment vaults), as those are tracked at the ShareToken level (lines 1140-1172). If the investment manager invests most of the vault's assets, can totalAssets() become very small while actual protocol-wide assets are high, causing new deposit conversions to receive disproportionately many shares compared to earlier depositors?",
    "ERC7575VaultUpgradeable._convertToShares() (lines 1188-1196) normalizes assets to 18 decimals using scalingFactor and calls ShareTokenUpgradeable.convertNormalizedAssetsToShares(). If scalingFactor is incorrectly calculated in initialize() (lines 186-188) for assets with non-standard decimals, can this cause shares to be minted at wrong ratios, allowing an attacker to receive far more shares than their assets justify?",
    "In ERC7575VaultUpgradeable._convertToAssets() (lines 1204-1216), the function calls ShareTokenUpgradeable.convertSharesToNormalizedAssets() and then denormalizes back to asset decimals (line 1214). If the scaling factor is 1 (assetDecimals == 18), the function returns normalizedAssets directly (line 1212). Can this bypass any rounding protections and cause precision loss in the conversion?",
    "ERC7575VaultUpgradeable.convertToShares() and convertToAssets() are public view functions used for preview calculations. If an attacker repeatedly queries these functions with various input amounts to find rounding discrepancies, can they craft deposit/redeem amounts that maximize rounding errors in their favor, extracting value from other users?",
    "ERC7575VaultUpgradeable.investAssets() (lines 1448-1465) approves the investment vault and deposits assets with ShareToken as receiver (line 1461). If the investment vault is malicious and does not return the expected shares or transfers them to the wrong address, can the ShareToken's investment balance be manipulated, affecting getInvestedAssets() calculations across the protocol?",
    "In ERC7575VaultUpgradeable.investAssets(), the function checks that amount <= totalAssets() (lines 1454-1457). However, totalAssets() already excludes reserved assets. If the investment manager tries to invest exactly totalAssets(), can this cause the vault to have insufficient assets to fulfill pending redemptions, trapping user funds?",
    "ERC7575VaultUpgradeable.withdrawFromInvestment() (lines 1477-1509) calculates shares using previewWithdraw() on the investment vault (line 1489) and caps at maxShares (line 1490). If the preview function returns a higher share amount than necessary, can the vault burn more investment shares than needed, causing a loss of invested assets?",
    "In ERC7575VaultUpgradeable.withdrawFromInvestment(), the function checks for InvestmentSelfAllowanceMissing (lines 1494-1497). If the ShareToken does not have self-allowance on its investment ShareToken balance, can withdrawal attempts permanently fail, locking all invested assets in the investment vault?",
    "ERC7575VaultUpgradeable.investAssets() emits AssetsInvested event with shares received (line 1463). If the investment vault returns fewer shares than expected due to fees or slippage, but the event still emits the amount parameter, can off-chain systems tracking investments miscalculate the actual invested position?",
    "ERC7575VaultUpgradeable.cancelDepositRequest() (lines 1574-1595) moves pendingDepositAssets to pendingCancelDepositAssets and adds controller to controllersWithPendingDepositCancelations set (line 1591). If the controller never calls claimCancelDepositRequest() to claim their canceled assets, can they remain in the pending cancelation set forever, permanently blocking new deposits for that controller?",
    "In ERC7575VaultUpgradeable.cancelDepositRequest(), assets are moved from totalPendingDepositAssets to totalCancelDepositAssets (lines 1586-1588). Both are excluded in totalAssets() calculation. Can a user effectively 'hide' their assets from available investment by canceling their deposit request but never claiming the cancelation, reducing the vault's deployable capital?",
    "ERC7575VaultUpgradeable.fulfillCancelDepositRequest() (lines 994-1006) and fulfillCancelRedeemRequest() (lines 1081-1091) are callable only by investment manager. If the investment manager delays fulfilling cancelations for a long time, can users be locked out of their funds with no recourse since there are no time limits on fulfillment?",
    "In ERC7575VaultUpgradeable.claimCancelDepositRequest() (lines 1691-1711), assets are transferred using SafeTokenTransfers.safeTransfer() (line 1707). If the asset token has a transfer hook that calls back into the vault, can an attacker re-enter and claim their canceled deposit multiple times before the state is finalized?",
    "ERC7575VaultUpgradeable.cancelRedeemRequest() (lines 1745-1764) moves shares from pendingRedeemShares to pendingCancelRedeemShares but does not transfer shares anywhere (lines 1756-1757). If the shares remain in the vault's balance, can they be incorrectly counted in totalClaimableRedeemShares calculations, affecting circulating supply metrics?",
    "ERC7575VaultUpgradeable.getActiveDepositRequesters() (lines 1910-1916) returns all active deposit requester addresses. If the EnumerableSet contains more than 100 addresses, the function reverts with TooManyRequesters (lines 1912-1914). Can this cause off-chain monitoring tools to fail when trying to query active requesters, preventing visibility into pending deposits?",
    "In ERC7575VaultUpgradeable.getControllerStatus() (lines 1967-1977), the function returns a struct with all pending and claimable amounts for a controller. If the struct is used in external calls that have limited return data size, can the function fail for controllers with many simultaneous requests?",
    "ERC7575VaultUpgradeable.initialize() (lines 150-190) is protected by the initializer modifier. If the implementation contract is deployed and initialize() is not called immediately, can an attacker call initialize() on the implementation (not proxy) to set themselves as owner, potentially affecting future upgrades?",
    "In ERC7575VaultUpgradeable.initialize(), scalingFactor is calculated as 10^(18 - assetDecimals) and must fit in uint64 (lines 186-188). For assets with 6 decimals, scalingFactor = 10^12 which fits. But if this calculation ever overflows uint64, the function reverts with ScalingFactorTooLarge. Can this prevent legitimate vaults from being initialized for certain asset types?",
    "ERC7575VaultUpgradeable uses ERC-7201 namespaced storage with VAULT_STORAGE_SLOT = keccak256('erc7575.vault.storage') (line 84). If a future upgrade adds new storage variables outside the VaultStorage struct, can this cause storage collisions with the base Ownable2StepUpgradeable or Initializable slots, corrupting contract state?",
    "ERC7575VaultUpgradeable.setOperator() (lines 264-271) delegates to ShareTokenUpgradeable.setOperatorFor() to preserve msg.sender context (line 267). If the ShareToken's setOperatorFor() has a bug that incorrectly records the controller, can this cause operator permissions to be assigned to the wrong user, allowing unauthorized async operations?",
    "In ERC7575VaultUpgradeable.isOperator() (lines 287-291), the function queries ShareTokenUpgradeable.isOperator() directly. If the ShareToken contract is upgraded and the operator storage layout changes, can this view function return stale or incorrect operator status, causing authorization checks to fail incorrectly?",
    "WERC7575Vault.deposit() (lines 360-363) calls previewDeposit(assets) to calculate shares and then _deposit() to mint them. The _deposit() function checks isActive and reverts with VaultNotActive if the vault is paused (line 325). If the vault is paused between previewDeposit() and deposit(), can this cause user transactions to fail with incorrect error messages?",
    "In WERC7575Vault._deposit() (lines 324-336), SafeTokenTransfers.safeTransferFrom() is called before minting shares (line 332). If the asset token is a non-standard ERC20 with reentrancy hooks, can an attacker call deposit() recursively and mint multiple sets of shares for the same asset transfer?",
    "WERC7575Vault.mint() (lines 385-388) calls previewMint(shares) with Ceil rounding to calculate required assets (line 260). If the ceiling rounding causes the user to pay 1 wei more than the floor-rounded value, can repeated mint operations accumulate these rounding differences to extract value from users?",
    "WERC7575Vault._withdraw() (lines 397-411) calls _shareToken.spendSelfAllowance(owner, shares) (line 407) before burning shares. If the owner does not have sufficient self-allowance despite having shares, can this prevent them from withdrawing their assets, effectively locking their funds?",
    "In WERC7575Vault.redeem() (lines 464-467), shares are burned from owner (line 408) and assets are transferred to receiver (line 409). If the burn succeeds but the transfer fails due to SafeTokenTransfers checks, can shares be burned without assets being transferred, causing permanent loss of user funds?",
    "WERC7575Vault._convertToShares() (lines 215-220) multiplies assets by _scalingFactor using Math.mulDiv(assets, scalingFactor, 1, rounding). If assets is very large (close to uint256 max), can the multiplication overflow despite using Math.mulDiv, causing the conversion to revert or return incorrect values?",
    "In WERC7575Vault._convertToAssets() (lines 237-246), if _scalingFactor == 1 (asset has 18 decimals), the function returns shares directly (line 242). Otherwise, it divides shares by scalingFactor (line 244). Can this branching logic introduce inconsistencies in conversion accuracy between 18-decimal assets and lower-decimal assets?",
    "WERC7575Vault.previewDeposit() uses Floor rounding (line 253) while previewMint() uses Ceil rounding (line 260). If a user calculates expected shares using previewDeposit() but calls mint() instead of deposit(), can they receive fewer shares than expected due to the rounding difference?",
    "WERC7575Vault.previewWithdraw() uses Ceil rounding (line 268) to calculate required shares. If the vault has insufficient shares in circulation to satisfy a withdrawal request, can the ceiling rounding cause the required shares to exceed the owner's balance, preventing legitimate withdrawals?",
    "WERC7575Vault constructor (lines 88-116) validates that asset decimals are between MIN_ASSET_DECIMALS (6) and SHARE_TOKEN_DECIMALS (18). If an asset with 5 decimals is deployed, the constructor reverts with UnsupportedAssetDecimals. Can this permanently prevent vault deployment for legitimate assets that don't fit the decimal range?",
    "In WERC7575Vault constructor, shareToken.decimals() is checked to be exactly 18 (lines 101-103). If the ShareToken is upgraded to support different decimal configurations, can newly deployed vaults fail to initialize because the decimal check becomes outdated?",
    "WERC7575Vault constructor calculates scalingFactor as 10^(18 - assetDecimals) (line 107) and checks it fits in uint64 (line 108). For 6-decimal assets, scalingFactor = 10^12 = 1,000,000,000,000 which fits. Can this constraint ever be violated for assets within the supported decimal range, or is the check redundant?",
    "In WERC7575Vault constructor, the vault is set to active by default (_isActive = true, line 112). If the owner forgets to register the vault in the ShareToken's registerVault() before users try to interact with it, can deposits succeed but fail during minting because the vault is not authorized?",
    "WERC7575Vault.maxDeposit() returns type(uint256).max (line 287), indicating unlimited deposits. If the vault has reserved assets that limit available capacity, can users call deposit() with maxDeposit() amounts and cause unexpected reverts because totalAssets() constraints are exceeded?",
    "WERC7575Vault.maxWithdraw() (lines 305-307) calls _convertToAssets(_shareToken.balanceOf(owner)) to calculate the maximum withdrawable assets. If the conversion uses Floor rounding, can the returned value be slightly less than the owner's actual withdrawable amount, causing confusion for integrators?",
    "ShareTokenUpgradeable.registerVault() (lines 195-234) validates that vault.asset() == asset (line 200) and vault.share() == this (line 203). If a malicious vault implements these functions as view functions that return correct values during registration but change behavior afterward via delegatecall or storage manipulation, can the vault bypass validation checks?",
    "In ShareTokenUpgradeable.registerVault(), if investmentShareToken is already configured, the function automatically calls _configureVaultInvestmentSettings() (lines 222-225). If this configuration call fails due to a bug in the investment vault, does the entire registration transaction revert, preventing the vault from being registered at all?",
    "ShareTokenUpgradeable.registerVault() enforces MAX_VAULTS_PER_SHARE_TOKEN = 10 (lines 210-212). If an attacker registers 10 dummy vaults with minimal assets to fill the slots, can they prevent the owner from registering legitimate vaults, effectively DOSing the multi-asset system?",
    "ShareTokenUpgradeable.unregisterVault() (lines 282-327) checks vault metrics to ensure no pending requests exist (lines 293-309). If a malicious vault implements getVaultMetrics() to always return non-zero values, can this permanently prevent unregistration of the vault, locking it in the registry?",
    "In ShareTokenUpgradeable.unregisterVault(), the function checks asset.balanceOf(vaultAddress) == 0 (line 318). If assets are accidentally sent to the vault address after all user operations are complete, can this prevent unregistration permanently despite no user funds being at risk?",
    "ShareTokenUpgradeable.unregisterVault() removes the vault from assetToVault and vaultToAsset mappings (lines 323-324). If the vault has pending async operations that complete after unregist",
    "In WERC7575ShareToken.batchTransfers() (lines 700-734), the function consolidates transfers using consolidateTransfers() and updates _balances directly without verifying that sum(debits) == sum(credits) across all accounts. Can an attacker exploit this missing zero-sum validation by crafting batch transfers where the validator accidentally approves unbalanced arrays (e.g., debtors=[A,B], creditors=[C], amounts=[100,50]) to mint tokens out of thin air, violating the totalSupply conservation invariant?",
    "In WERC7575ShareToken.consolidateTransfers() (lines 1006-1062), when aggregating multiple transfers into DebitAndCredit structs, the function accumulates account.debit and account.credit independently without checking if sum(all debits) equals sum(all credits) across the entire batch. If a malicious validator submits arrays where total debits != total credits (e.g., 3 debtors of 100 each, 2 creditors of 150 each = net +300 to supply), can this bypass create phantom tokens or destroy existing tokens, breaking the Token Supply Conservation invariant?",
    "In WERC7575ShareToken.batchTransfers() (lines 704-723), after consolidation, accounts with (debit > credit) decrease their _balances by (debit - credit), while accounts with (credit > debit) increase _balances by (credit - debit). If the input arrays are malformed such that sum(all account decreases) != sum(all account increases), does this silently corrupt totalSupply? For example, if debtors=[Alice, Bob] amounts=[100,50] but creditors=[Charlie, Charlie] (duplicate), does Charlie receive 150 while Alice+Bob only lose 150, or is there an edge case where totalSupply diverges from sum(_balances)?",
    "In WERC7575ShareToken.rBatchTransfers() (lines 1119-1202), the function performs the same consolidation as batchTransfers() but additionally updates _rBalances based on rBalanceFlags bitmap. If an attacker crafts batch transfers with non-zero-sum debits/credits, can they exploit the rBalance adjustment logic to create accounting mismatches between _balances and _rBalances? Specifically, if net balance change != 0, the rBalance adjustments (lines 1147-1153 for debits, 1166-1179 for credits) might not preserve the invariant that _rBalances[account] represents restricted portion of _balances[account].",
    "The WERC7575ShareToken.consolidateTransfers() function (lines 1023-1060) uses unchecked arithmetic when accumulating debits/credits: 'accounts[j].debit += amount' and 'accounts[j].credit += amount' (lines 1036, 1040). If a malicious validator submits batch transfers with carefully chosen amounts that cause uint256 overflow in the debit or credit accumulation for a specific account, can this overflow be exploited to make (debit - credit) calculations incorrect, bypassing balance checks and creating tokens? For example, if Alice is debited uint256.max, then credited 1, does debit overflow cause (debit - credit) to compute incorrectly?",
    "In WERC7575ShareToken.rBatchTransfers() (lines 1132-1154), when an account is a net debtor (debit > credit), the function decreases _balances and conditionally increases _rBalances if ((rBalanceFlags >> i) & 1) == 1. However, line 1152 performs _rBalances[account.owner] += amount in an unchecked block. If the rBalance adjustment causes _rBalances[account] to exceed _balances[account], does this violate the semantic invariant that _rBalances represents a 'restricted portion' of _balances? Can an attacker use this to create a state where rBalance > balance, breaking downstream logic that assumes rBalance <= balance?",
    "In WERC7575ShareToken.rBatchTransfers() (lines 1155-1180), when an account is a net creditor (credit > debit), the function increases _balances and conditionally decreases _rBalances with a floor at 0 (lines 1170-1178). If _rBalances[account] < amount, it sets _rBalances to 0 instead of reverting. Can a malicious validator exploit this silent capping behavior to intentionally zero out rBalances for accounts that should maintain non-zero restricted balances, effectively 'freeing' restricted funds that should remain locked? For example, if Alice has _balances=1000, _rBalances=500 (500 restricted), and the validator credits Alice 600 with rBalance flag set, does this incorrectly zero _rBalances, allowing Alice to transfer all 1000 when only 500 should be transferable?",
    "The WERC7575ShareToken contract tracks both _balances (line 125) and _rBalances (line 126) as separate mappings. The batchTransfers() function (lines 700-734) only updates _balances without touching _rBalances, while rBatchTransfers() (lines 1119-1202) updates both. If the validator accidentally calls batchTransfers() when they should call rBatchTransfers() for accounts with active rBalances, does this create a desynchronization where _balances change but _rBalances remain stale? Can users exploit this by triggering batch transfers that should decrease their rBalance (to free restricted funds) but the validator uses the wrong function, allowing them to transfer restricted amounts?",
    "In WERC7575ShareToken.adjustrBalance() (lines 1435-1471), the revenue admin adjusts _rBalances directly based on investment returns (amounti vs amountr). Lines 1451-1455 increase _rBalances if amountr > amounti (profit), and lines 1456-1468 decrease _rBalances if amountr < amounti (loss). However, these adjustments happen independently of _balances updates. If a user has _balances=100, _rBalances=50, and the revenue admin calls adjustrBalance() to increase _rBalances by 60 (lines 1453-1455), does this create _rBalances=110 while _balances=100, violating the invariant that rBalance is a 'portion' of balance? Can this corruption enable the user to have more restricted balance than total balance?",
    "In WERC7575ShareToken._update() (lines 519-547), the internal transfer function updates _balances for minting, burning, and transfers, emitting Transfer events. However, _rBalances are never touched in _update(). If a vault calls mint() (lines 363-369) to mint shares to a user, does the new _balances increase while _rBalances remains 0? If the user then participates in rBatchTransfers() where their account should have rBalance tracking, can the lack of initialization cause accounting errors? Specifically, if Alice receives 1000 newly minted shares (rBalance=0), then is debited 500 in rBatchTransfers() with rBalance flag set, does her rBalance become 500 while balance becomes 500, making 100% of her balance restricted when it should be 50%?",
    "WERC7575ShareToken.permit() (lines 396-429) validates EIP-712 signatures using ECDSA.recover() and checks the recovered address matches the owner. The function uses _domainSeparatorV4() (line 416) which includes block.chainid in the domain separator. However, if the contract is deployed on multiple chains (mainnet, Polygon, etc.) with the same address, and a user signs a permit on chain A, can an attacker observe the signature and replay it on chain B before the user submits it there? While _domainSeparatorV4() includes chainid, if the contract doesn't verify block.chainid matches the cached value in _domainSeparatorV4(), could a chain fork or reorg enable replay attacks?",
    "In WERC7575ShareToken.permit() (lines 396-429), when owner == spender (self-approval), the function requires the signer to be the validator (lines 419-422), not the owner. However, the nonce is still consumed from the owner's nonce counter via _useNonce(owner) (line 401). Can a malicious validator who controls the validator private key generate permit signatures for any user's self-allowance without the user's consent, by signing permit(user, user, amount, deadline, v, r, s) and spending the user's nonce? This would allow the validator to grant self-allowances to any user, enabling those users to transfer tokens they shouldn't be able to move. While the validator is trusted, if the validator key is compromised or if there's a bug in validator signature generation, can this be exploited?",
    "WERC7575ShareToken.permit() (lines 396-429) checks if block.timestamp > deadline and reverts with ERC2612ExpiredSignature (lines 397-399). However, the deadline parameter is part of the EIP-712 signature hash (line 411). Can an attacker front-run a legitimate permit() transaction by observing the mempool, extracting the signature parameters (v, r, s, deadline), and submitting their own permit() call with the exact same parameters but a different value (line 410)? While the signature is for a specific value, if the attacker submits with value=0 or a different value, does the signature validation at line 417 correctly reject it, or is there an edge case where partial signature components can be reused?",
    "In WERC7575ShareToken.permit() (lines 419-422), when owner == spender, the code checks if signer != _validator and reverts. However, line 424 then checks if signer != owner for the non-self-approval case. Can an attacker exploit a race condition where they first call permit() with owner != spender (passing owner signature validation), and then immediately call permit() again with owner == spender (passing validator validation) to grant both regular allowance and self-allowance in separate transactions? While each individual permit() call is valid, can the sequence be exploited to bypass intended authorization flows, especially if there's a logical dependency between regular and self-allowances?",
    "The WERC7575ShareToken.permit() function (lines 396-429) uses inline assembly to construct the EIP-712 structHash (lines 405-414). The assembly block manually places permitTypehash, owner, spender, value, nonce, and deadline into memory and hashes them. Can an attacker exploit any memory layout vulnerabilities in this assembly code? Specifically, lines 408-411 use mstore with offsets 0x20, 0x40, 0x60, 0x80, 0xa0. If freeMemPtr (line 406) is manipulated or if there's an off-by-one error in the offsets, could this cause the hash to include wrong values or allow signature malleability attacks where different (owner, spender, value) combinations produce the same hash?",
    "WERC7575ShareToken.transfer() (lines 472-477) calls _spendAllowance(from, from, value) (line 475) to enforce self-allowance requirement before calling super.transfer(). However, _spendAllowance() is inherited from OpenZeppelin's ERC20, which checks allowance[from][from] and decrements it. Can an attacker exploit the case where a user has self-allowance = 100 and attempts to transfer 50 twice? The first transfer consumes 50 from self-allowance (leaving 50), but does the second transfer correctly fail if the user only has 40 self-allowance remaining? Specifically, if _spendAllowance() has any edge cases around allowance underflow or incorrect decrementing, can this be used to bypass the dual authorization invariant?",
    "WERC7575ShareToken.transferFrom() (lines 488-492) requires both self-allowance and caller allowance by calling _spendAllowance(from, from, value) (line 490) and then super.transferFrom(from, to, value) which internally calls _spendAllowance(from, msg.sender, value). However, the self-allowance check happens BEFORE the KYC check (line 489). Can an attacker exploit this ordering by repeatedly calling transferFrom() with a non-KYC recipient, causing the self-allowance to be decremented (line 490 consumes it) even though the transaction reverts at line 489? This would allow an attacker to drain someone's self-allowance without actually transferring tokens, effectively DOS'ing their ability to transfer in the future.",
    "In WERC7575ShareToken.approve() (lines 439-444), the function blocks self-approval by checking if msg.sender == spender and reverting (lines 440-443). The comment says 'use permit instead for self-spending'. However, can an attacker who compromises a user's account but not the validator key exploit this by first calling permit() with owner != spender to grant themselves regular allowance, then calling transferFrom() which would normally require self-allowance but the attacker has bypassed the self-allowance requirement? Wait, transferFrom() still calls _spendAllowance(from, from, value), so self-allowance is still needed. Can the attacker exploit the fact that they can't directly approve(self, self) but can use permit() with validator signature to grant self-allowance, potentially bypassing user consent if the validator is compromised?",
    "WERC7575ShareToken.transferFrom() (lines 488-492) calls super.transferFrom(from, to, value) after the self-allowance check. OpenZeppelin's ERC20.transferFrom() internally calls _spendAllowance(from, msg.sender, value). However, if msg.sender == from (user calling transferFrom on their own tokens), does OpenZeppelin's _spendAllowance() correctly handle the case where it tries to spend allowance[from][from] twice (once at line 490 explicitly, once inside super.transferFrom())? Can this double-spending of the same allowance mapping cause underflow or incorrect allowance tracking, allowing a user to transfer more than their self-allowance permits?",
    "The dual allowance model requires both allowance[from][from] (self-allowance) and allowance[from][msg.sender] (caller allowance) for transferFrom() (lines 488-492). However, the comment at line 486 says 'Always spends from self-allowance regardless of caller'. Can an attacker exploit confusion around this comment by calling transferFrom() where they are NOT the owner, but the owner has granted them regular allowance? For example, if Alice grants Bob allowance[Alice][Bob] = 100 but Alice has no self-allowance, can Bob call transferFrom(Alice, Charlie, 50)? Line 490 would try to spend allowance[Alice][Alice] which is 0, causing revert. Is this the intended behavior, or can Bob bypass this by first calling permit() on Alice's behalf (if Bob has a validator signature) to grant Alice self-allowance, then using his regular allowance?",
    "WERC7575ShareToken.transfer() (lines 472-477) checks isKycVerified[to] at line 474 before allowing the transfer. However, mint() (lines 363-369) also checks isKycVerified[to] at line 367. Can an attacker exploit a race condition where they call transfer() to a recipient who is currently KYC-verified, but the KYC admin calls setKycVerified(recipient, false) in the same block before transfer() executes? If the transactions are ordered such that the KYC revocation happens first, does transfer() correctly revert, or is there a TOCTOU (Time-Of-Check-Time-Of-Use) vulnerability where the KYC status changes between the check and the actual balance update?",
    "WERC7575ShareToken.batchTransfers() (lines 700-734) updates _balances directly without checking isKycVerified for any of the creditors. The function emits Transfer events (line 727) but never validates that creditors[i] is KYC-verified before increasing _balances[creditors[i]] (line 716). Can a malicious validator exploit this by including non-KYC addresses as creditors in a batch transfer, bypassing the KYC enforcement that exists in transfer() and transferFrom()? This would violate the invariant that 'Only isKycVerified[recipient] == true can receive/hold shares', allowing non-KYC users to hold tokens through batch operations.",
    "WERC7575ShareToken.rBatchTransfers() (lines 1119-1202) similarly updates _balances for net creditors (lines 1155-1180) without checking isKycVerified. In the consolidation phase (lines 1123), accounts are aggregated, and in the balance update phase (lines 1129-1187), if account.credit > account.debit, the account receives a net credit (line 1162). If this account belongs to a non-KYC user, can the validator exploit rBatchTransfers() to transfer tokens to non-KYC addresses by including them as creditors? The function never calls isKycVerified[account.owner] before increasing _balances[account.owner] at line 1162.",
    "In WERC7575ShareToken.mint() (lines 363-369), the function checks isKycVerified[to] at line 367 before minting. However, burn() (lines 376-382) also checks isKycVerified[from] at line 380. Can a vault exploit a scenario where a user was KYC-verified when they deposited (mint() succeeded), but later their KYC status is revoked (setKycVerified(user, false)), and now burn() will always revert because of the KYC check? This would trap the user's funds: they can't withdraw (burn reverts due to KYC), and they can't transfer (transfer requires KYC). Is this intended behavior, or does it violate the invariant that users should always be able to exit their position?",
    "WERC7575ShareToken.setKycVerified() (lines 294-302) allows the KYC admin to set isKycVerified[controller] to true or false. The function only emits an event if the status actually changes (lines 298-301). Can a malicious user exploit the gap between losing KYC status and having their tokens frozen by front-running the setKycVerified(user, false) transaction? For example, if the user observes the setKycVerified tx in the mempool, can they quickly call transfer() to move all their tokens to another address (that they control and is KYC-verified) before the KYC revocation takes effect? Once the tokens are at the new address, the original address being non-KYC doesn't matter, effectively bypassing KYC enforcement.",
    "In WERC7575ShareToken.adjustrBalance() (lines 1435-1471), when amountr > amounti (profit), the function increases _rBalances by (amountr - amounti) at lines 1453-1455 using unchecked arithmetic. Can an attacker (if they compromise the revenue admin key) exploit this by calling adjustrBalance() multiple times with the same timestamp, causing _rBalances to increase repeatedly? Wait, line 1436 checks if _rBalanceAdjustments[account][ts][0] != 0 and reverts with RBalanceAdjustmentAlreadyApplied, so duplicate timestamps are prevented. However, can the attacker use different timestamps (ts1, ts2, ts3, ...) to repeatedly increase _rBalances without bound? Each call with a unique timestamp would bypass the duplicate check, allowing unlimited rBalance inflation.",
    "WERC7575ShareToken.adjustrBalance() (lines 1435-1471) uses unchecked arithmetic when increasing _rBalances at line 1454: '_rBalances[account] += difference'. Can this unchecked addition cause uint256 overflow if the revenue admin calls adjustrBalance() with very large amountr values? For example, if _rBalances[account] = uint256.max - 100 and the admin calls adjustrBalance() with amountr - amounti = 200, does the overflow wrap _rBalances[account] to 99, effectively zeroing the user's restricted balance? This would allow the user to transfer tokens that should be restricted, violating the rBalance tracking invariant.",
    "In WERC7575ShareToken.adjustrBalance() (lines 1456-1468), when amountr < amounti (loss), the function checks if currentRBalance < difference at line 1459 and reverts with RBalanceAdjustmentTooLarge if true. However, the comment at lines 1460-1462 says 'Should not happen otherwise we can't cancel with cancelrBalanceAdjustment'. Can an attacker exploit a scenario where they cause currentRBalance to become insufficient through other operations (like rBatchTransfers() crediting the account, which decreases rBalance at lines 1166-1178), and then the revenue admin's legitimate adjustrBalance() call reverts? This would DOS the revenue admin's ability to record investment losses for that account, breaking the accounting system.",
    "WERC7575ShareToken.cancelrBalanceAdjustment() (lines 1485-1514) reverses a previous adjustrBalance() by applying the opposite adjustment. At lines 1494-1504, if amountr > amounti (original was profit), the cancellation decreases _rBalances. However, line 1497 checks if currentRBalance < difference and reverts with RBalanceAdjustmentTooLarge. Can an attacker exploit this by deliberately draining their rBalance through rBatchTransfers() (receiving net credits that decrease rBalance) after an adjustrBalance() profit adjustment, making it impossible for the revenue admin to cancel the adjustment? This would permanently lock incorrect accounting data in _rBalanceAdjustments[account][ts], preventing corrections.",
    "In WERC7575ShareToken.adjustrBalance() (lines 1442-1447), the function validates that amountr <= amounti * MAX_RETURN_MULTIPLIER (where MAX_RETURN_MULTIPLIER = 2, line 114). This caps investment returns at 100% profit. However, the check at line 1442 is 'if (amounti > type(uint256).max / MAX_RETURN_MULTIPLIER)', which reverts to prevent overflow in the multiplication at line 1445. Can an attacker exploit this by front-running the revenue admin's adjustrBalance() call with a transaction that manipulates amounti to be exactly type(uint256).max / 2 + 1, causing line 1442 to revert? This would DOS the revenue admin's ability to record returns for that account, freezing accounting updates.",
    "The _rBalanceAdjustments mapping (line 127) stores adjustments as 'mapping(address => mapping(uint256 => uint256[2]))', where uint256 is the timestamp and uint256[2] is [amounti, amountr]. Can two adjustments with the same timestamp overwrite each other? Line 1436 checks if _rBalanceAdjustments[account][ts][0] != 0, so duplicate timestamps are prevented. However, if the revenue admin cancels an adjustment (line 1512 deletes the mapping entry), can they immediately re-apply a different adjustment with the same timestamp? For example, cancel adjustrBalance(account, 100, 50, 60), then call adjustrBalance(account, 100, 50, 70) - both use ts=100. Does the cancellation properly clear the [0] index to allow re-use, or does the delete leave residual state?",
    "WERC7575ShareToken.registerVault() (lines 218-241) validates that the vault's asset() matches the provided asset parameter (line 224) and that the vault's share() matches address(this) (lines 227-229). However, can a malicious vault contract implement asset() and share() to return correct values during registration, but then change their return values later (via upgradeable proxy or mutable storage)? After registration, if the vault's asset() no longer matches, can it exploit mint()/burn() authorization to mint shares for the wrong asset or steal funds by calling mint() with inflated amounts?",
    "In WERC7575ShareToken.registerVault() (lines 218-241), the function checks if _assetToVault.contains(asset) at line 221 and reverts with AssetAlreadyRegistered if true. However, can an attacker exploit a race condition where two registerVault() transactions for the same asset are submitted simultaneously? If both transactions read _assetToVault.contains(asset) as false before either writes, can both proceed to set() the mapping, causing the second registration to overwrite the first? This would orphan the first vault's authorization, potentially locking user funds if they had deposited into the first vault but it's no longer registered.",
    "WERC7575ShareToken.unregisterVault() (lines 256-285) validates that the vault has zero totalAssets() (line 265) and zero asset balance (line 274) before allowing unregistration. However, the function uses try-catch blocks (lines 265-271, 274-278) and reverts with a string error if either check fails. Can a malicious vault implement totalAssets() to always revert, causing the try-catch at line 265 to enter the catch block (line 267) which reverts with 'cannot verify vault has no outstanding assets'? This would permanently prevent unregistration of that vault, even if the owner wants to remove a buggy or malicious vault implementation, effectively DOS'ing vault management.",
    "In WERC7575ShareToken.registerVault() (lines 232-234), the function enforces MAX_VAULTS_PER_SHARE_TOKEN = 10 to prevent DOS via unbounded iteration. However, can an attacker exploit this limit by registering 10 vaults for different assets, then having users deposit into all 10 vaults? If the protocol later wants to register an 11th vault, it would be blocked. Can users front-run a vault unregistration by depositing into that vault (making totalAssets() > 0), preventing unregistration (line 266 check), and keeping the slot occupied indefinitely? This would allow users to DOS new vault registrations by keeping all 10 slots filled.",
    "The WERC7575ShareToken contract maintains a bidirectional mapping: _assetToVault (EnumerableMap) and _vaultToAsset (mapping) (lines 133-134). During registerVault() (lines 237-238), both mappings are set. However, during unregisterVault() (lines 281-282), the function removes from _assetToVault and deletes _vaultToAsset[vaultAddress]. Can these two mappings become desynchronized if an error occurs between line 281 and line 282? For example, if the transaction reverts after remove() succeeds but before delete, would _assetToVault no longer contain the asset, but _vaultToAsset[vault] still points to the asset? This could allow the vault to still call mint()/burn() (onlyVaults modifier checks _vaultToAsset[msg.sender] at line 201) even though the asset is unregistered.",
    "WERC7575ShareToken.mint() and burn() (lines 363-382) use the onlyVaults modifier (line 363, 376) which checks if _vaultToAsset[msg.sender] != address(0) (lines 200-203). However, if a vault contract is malicious or compromised, can it call mint() to mint unlimited shares as long as the recipient is KYC-verified (line 367 check)? The modifier only validates that msg.sender is a registered vault, but doesn't check if the mint amount is reasonable or if the vault has received corresponding assets. Can a malicious vault mint 1 billion shares without depositing any assets, inflating totalSupply and diluting existing shareholders?",
    "WERC7575ShareToken.consolidateTransfers() (lines 1006-1062) skips self-transfers at line 1029: 'if (debtor != creditor)'. This means transfers where debtor == creditor are ignored and don't appear in the consolidated accounts array. Can an attacker exploit this by submitting batch transfers that include self-transfers to manipulate the zero-sum calculation? For example, if the batch is [Alice→Alice 100, Bob→Charlie 100, Charlie→Bob 100], the self-transfer is skipped, leaving Bob→Charlie and Charlie→Bob which net to zero. However, if the validator miscalculates and includes the self-transfer in their accounting, can there be a mismatch between on-chain state (which ignores self-transfers) and off-chain expectations?",
    "In WERC7575ShareToken.batchTransfers() (lines 700-734), after consolidation, the function emits Transfer events for ALL original transfers at lines 726-731, including self-transfers. Line 727 emits 'emit Transfer(debtors[i], creditors[i], amounts[i])' for every i. Can an attacker exploit this by submitting self-transfers (debtor == creditor) which are skipped in balance updates (line 1029 in consolidateTransfers()) but still emit Transfer events? Off-chain indexers that listen to Transfer events would see tokens moving, but on-chain balances wouldn't change. Can this be used to manipulate accounting, trigger false alerts, or exploit protocols that rely on Transfer events for bookkeeping?",
    "WERC7575ShareToken.transfer() (lines 472-477) calls _spendAllowance(from, from, value) at line 475. If a user attempts to transfer tokens to themselves (transfer(msg.sender, 100)), does the function correctly handle this edge case? The call to _spendAllowance(msg.sender, msg.sender, 100) would decrement allowance[msg.sender][msg.sender], and then super.transfer(msg.sender, 100) would attempt to transfer tokens from msg.sender to msg.sender. Does OpenZeppelin's ERC20.transfer() skip self-transfers (like consolidateTransfers() does), or does it actually move _balances[msg.sender] -= 100 and _balances[msg.sender] += 100, which nets to zero but still consumes self-allowance? Can this be exploited to drain a user's self-allowance without actually moving tokens?",
    "In WERC7575ShareToken._update() (lines 519-547), the function handles minting (from == address(0)), burning (to == address(0)), and regular transfers. At line 546, it emits a Transfer event. However, if from == to (self-transfer), does _update() correctly handle this? Lines 524-532 would first subtract value from _balances[from], then lines 539-544 would add value back to _balances[to] (which is the same address). This works correctly, but does it unnecessarily consume gas? More importantly, if there's any reentrancy or callback during this process, could an attacker exploit the temporary balance reduction (after line 530 but before line 542) to break invariants?",
    "In WERC7575ShareToken.consolidateTransfers() (lines 1006-1062), the inner loop (lines 1034-1043) iterates through accountsLength to find existing accounts. The loop uses 'addFlags != 0' as an early exit condition (line 1034). Can an attacker exploit the case where debtor and creditor are the same address (wait, line 1029 skips those) but appear in different transfers? For example, if the batch is [Alice→Bob 100, Bob→Alice 50, Alice→Charlie 75], Alice appears as both debtor and creditor. When processing the second transfer (Bob→Alice), the loop finds Alice at position 0 and increments accounts[0].credit += 50 (line 1040). Is this correct, or should Alice have separate entries for her debtor and creditor roles?",
    "WERC7575ShareToken.consolidateTransfers() (lines 1006-1062) allocates accounts array with size 'debtorsLength * BATCH_ARRAY_MULTIPLIER' (line 1019), where BATCH_ARRAY_MULTIPLIER = 2 (line 119). This assumes at most 2N unique addresses (N debtors + N creditors). However, can an attacker craft a batch where the same address appears multiple times in both debtors and creditors arrays, but in a pattern that causes accountsLength to exceed 2N? For example, if all N transfers have unique debtor-creditor pairs, accountsLength = 2N, which fits. But if there's an off-by-one error in the allocation, can the function write beyond the accounts array bounds, causing memory corruption?",
    "In WERC7575ShareToken.consolidateTransfers() (lines 1034-1043), the inner loop checks if accounts[j].owner == debtor (line 1035) or accounts[j].owner == creditor (line 1038). The check uses 'else if' at line 1038, which assumes debtor != creditor (self-transfers already skipped at line 1029). However, can there be a vulnerability if the accounts array has duplicate entries due to a logic error? For example, if accounts[0] and accounts[5] both have owner = Alice, and a transfer involving Alice is processed, will the inner loop find her at position 0 and skip checking position 5, causing her credit/debit to be split incorrectly?",
    "WERC7575ShareToken.batchTransfers() (lines 700-734) calls consolidateTransfers() to aggregate accounts, then iterates through accountsLength at lines 704-723. At line 708, the function reads 'uint256 debtorBalance = _balances[account.owner]' and checks if debtorBalance < amount (line 709). However, can an attacker exploit the case where an account appears multiple times in the accounts array (due to a bug in consolidateTransfers()) and each occurrence decreases the balance? For example, if Alice appears at accounts[0] with net_debit=100 and also at accounts[5] with net_debit=50, does the loop process both entries, causing _balances[Alice] to be decremented twice?",
    "In WERC7575ShareToken.consolidateTransfers() (lines 1046-1055), when creating new account entries, the function checks if addFlags has bit 0 set (line 1046) for debtor and bit 1 set (line 1051) for creditor. At lines 1048 and 1053, it increments accountsLength after adding each new account. Can an attacker exploit an off-by-one error where accountsLength reaches exactly 2*debtorsLength, causing the next account addition to write to accounts[2*debtorsLength], which is out of bounds? The allocation is 'new DebitAndCredit[](debtorsLength * 2)' (line 1019), so valid indices are 0 to 2*debtorsLength-1. If accountsLength reaches 2*debtorsLength and another account is added, does this cause array out-of-bounds?",
    "WERC7575ShareToken.computeRBalanceFlags() (lines 802-963) is a pure function that computes a bitmap indicating which aggregated accounts need rBalance updates. The function replicates the exact account aggregation logic from consolidateTransfers() (lines 851-958 mirror 1023-1061). However, if the two functions diverge due to a code maintenance error (e.g., consolidateTransfers() is modified but computeRBalanceFlags() is not), can this cause rBalanceFlags to have bits set for the wrong account positions? For example, if consolidateTransfers() changes the order of account discovery, accounts[i] in consolidateTransfers() might no longer match the account at position i in computeRBalanceFlags(), causing rBatchTransfers() to update the wrong accounts' rBalances.",
    "In WERC7575ShareToken.computeRBalanceFlags() (lines 870-922), the function validates flag consistency: when an account is found again in a later transfer, it checks if the rBalance flag from the current transfer matches the flag already set from the first discovery (lines 877-894 for debtors, 901-918 for creditors). If the flags are inconsistent, it reverts with InconsistentRAccounts (lines 892, 916). Can an attacker exploit this by deliberately submitting boolean flag arrays (debtorsRBalanceFlags, creditorsRBalanceFlags) that have inconsistent flags for the same account? For example, if Alice is debtor in transfer 0 with flag=true, and debtor in transfer 5 with flag=false, the function reverts. However, can the attacker manipulate the order of transfers to avoid detection?",
    "WERC7575ShareToken.rBatchTransfers() (lines 1119-1202) uses rBalanceFlags passed as a parameter (line 1119)",
    "In ShareTokenUpgradeable._getShareTokenStorage() (lines 98-103), the storage slot is calculated as keccak256('erc7575.sharetoken.storage'). If a future upgrade introduces a new contract that inherits from ShareTokenUpgradeable and uses the same storage slot calculation pattern without proper namespace separation, could this lead to storage collision where two different contracts write to the same storage location, corrupting the assetToVault mapping or operator approvals?",
    "The initialize() function (lines 116-124) uses the 'initializer' modifier and checks if decimals() == 18. However, the function calls __ERC20_init() which sets the token name and symbol. If an attacker deploys a malicious proxy pointing to this implementation and calls initialize() with their own parameters before the legitimate owner, could they permanently set themselves as the owner via __Ownable_init(owner), gaining control over vault registration and investment configuration?",
    "In the constructor (lines 106-108), _disableInitializers() is called to prevent initialization of the implementation contract. However, if the implementation is deployed without a proxy and someone accidentally sends shares or assets to the implementation address, could these funds become permanently locked since the implementation is uninitialized and has no owner to recover them?",
    "The ShareTokenStorage struct (lines 83-93) uses EnumerableMap.AddressToAddressMap for assetToVault. If during an upgrade, the new implementation changes the struct layout by reordering fields or adding new fields before existing ones, could this cause storage slot misalignment where vaultToAsset mapping or operators mapping read from incorrect storage slots, leading to unauthorized vault access or operator permission corruption?",
    "The initialize() function enforces decimals() == DecimalConstants.SHARE_TOKEN_DECIMALS (line 121-123). If DecimalConstants.SHARE_TOKEN_DECIMALS is changed in a future version but the check remains hardcoded to 18, could this create an inconsistency where new deployments fail initialization while the constant definition has changed, or worse, allow initialization with wrong decimals if the constant changes but the check is not updated?",
    "In registerVault() (lines 195-235), the function validates that IERC7575(vaultAddress).asset() matches the provided asset parameter (line 200). However, if the vault contract's asset() function is malicious and returns different values on subsequent calls (stateful return), could an attacker register a vault with one asset but later use it to mint shares for a different asset, violating the one-to-one asset-vault mapping invariant?",
    "The registerVault() function checks $.assetToVault.length() >= MAX_VAULTS_PER_SHARE_TOKEN (lines 210-212) before registration. If an attacker front-runs legitimate vault registrations by repeatedly calling registerVault() with dummy vaults until the limit is reached, could they permanently DoS the protocol by preventing registration of real vaults, effectively bricking the share token?",
    "In registerVault() (line 215), the function calls $.assetToVault.set(asset, vaultAddress) and checks the return value to detect duplicate registrations. However, if an attacker registers vault A for asset X, then the owner unregisters it, could the attacker immediately re-register vault B for the same asset X before legitimate operations complete, potentially causing accounting inconsistencies if users have pending requests in the old vault?",
    "The registerVault() function automatically configures investment settings (lines 220-232) if investmentShareToken is already set. If the investment vault lookup (line 542) returns address(0) for a specific asset but other assets have valid investment vaults, could this create an asymmetric state where some vaults can invest while others cannot, leading to unfair yield distribution or unexpected behavior when users deposit into different asset vaults?",
    "In _configureVaultInvestmentSettings() (lines 540-551), the function approves type(uint256).max allowance to the vault on the investment ShareToken (line 549). If a registered vault is later found to be malicious or compromised, could it drain all investment ShareToken balance from this ShareToken contract since the unlimited approval remains active until manually revoked?",
    "The unregisterVault() function (lines 282-327) checks metrics.totalCancelDepositAssets != 0 (line 301-302) to prevent unregistration with pending cancelations. However, if the vault's getVaultMetrics() function reverts or returns incorrect data due to a bug, the try-catch block (line 310-313) reverts with CannotUnregisterActiveVault. Could an attacker exploit a malicious vault that always reverts in getVaultMetrics() to make their vault permanently unremovable, locking the asset slot forever?",
    "In unregisterVault(), the function checks IERC20(asset).balanceOf(vaultAddress) != 0 (lines 318-320) as a final safety check. If tokens are accidentally sent directly to the vault address outside of normal vault operations (e.g., via a simple transfer()), could this permanently block vault unregistration even when all user funds are properly accounted for and claimed, requiring manual intervention to sweep the excess tokens first?",
    "The vault() function (lines 143-146) uses assetToVault.tryGet(asset) and returns (bool, address). If the asset is not registered, it returns (false, address(0)). However, if a caller doesn't check the boolean return value and directly uses the returned address(0) as a vault, could they accidentally interact with the zero address, causing reverts or, worse, if a precompile exists at address(0) on certain L2s, unexpected behavior?",
    "The isVault() function (lines 337-340) checks if vaultToAsset[vaultAddress] != address(0). If an attacker deploys a contract at an address that collides with a previously registered and unregistered vault address (through CREATE2 manipulation across chains or after selfdestruct), could this function return false for a currently active vault or true for an unregistered vault, breaking authorization checks?",
    "In registerVault(), the function stores both $.assetToVault[asset] = vault and $.vaultToAsset[vault] = asset (lines 215-218). If there's a reentrancy vulnerability in the external calls to vault.asset() or vault.share() (lines 200, 203), could an attacker manipulate these mappings mid-registration to create a many-to-one or one-to-many mapping, violating the bijection invariant?",
    "In setOperator() (lines 480-486), the function checks if msg.sender == operator and reverts with CannotSetSelfAsOperator (line 481). However, the function then sets $.operators[msg.sender][operator] = approved without any additional validation. If a user calls setOperator(maliciousAddress, true) and later that malicious operator calls requestRedeem() on their behalf in a vault, could the operator drain all user shares since there's no per-vault or per-action operator permission granularity?",
    "The isOperator() function (lines 502-505) simply returns $.operators[controller][operator] without any time-based expiry or revocation checks. If a user approves an operator, then that operator's private key is compromised, could the attacker continue to operate on behalf of the user indefinitely until the user explicitly calls setOperator(operator, false), potentially losing all funds before they realize the compromise?",
    "In setOperatorFor() (lines 525-530), vaults can set operators on behalf of users with the onlyVaults modifier. If a malicious or compromised vault calls setOperatorFor(userA, maliciousOperator, true), could this grant unauthorized operator permissions without the user's knowledge, allowing the malicious operator to submit redeem requests and steal user shares?",
    "The operator system uses a single mapping $.operators[controller][operator] that applies across ALL vaults in the multi-asset system (lines 89, 483). If a user wants to approve an operator for vault A (USDC) but not vault B (USDT), is this granularity impossible? Could a malicious operator approved for one asset drain shares from all other assets since the approval is centralized at the ShareToken level?",
    "In setOperator(), the OperatorSet event is emitted (line 484) but there's no mechanism to query historical operator approvals. If an operator was approved, performed malicious actions, then was revoked, could there be a lack of audit trail to prove the operator's authorization at the time of the malicious action, complicating dispute resolution?",
    "The setOperatorFor() function (line 525) is onlyVaults but doesn't emit an event indicating which vault made the call. If multiple vaults attempt to set operators for the same controller-operator pair with conflicting approved values, could the last call silently override previous settings without any record of which vault initiated the change, causing confusion about operator permissions?",
    "In setInvestmentShareToken() (lines 569-587), the function requires $.investmentShareToken == address(0) (lines 572-574), meaning it can only be set once. If the initial investment ShareToken is set to a malicious or buggy contract, could the protocol be permanently stuck with that contract since there's no way to update it, potentially losing all invested funds if the malicious contract refuses to return assets?",
    "The setInvestmentShareToken() function iterates through all registered vaults (lines 580-584) and calls _configureVaultInvestmentSettings(). If one of the vaults in the middle of the iteration has a malicious asset() function that reverts, could this cause the entire setInvestmentShareToken() transaction to revert, leaving some vaults configured while others are not, creating an inconsistent investment state?",
    "In _configureVaultInvestmentSettings() (lines 540-551), the function queries IERC7575ShareExtended(investmentShareToken).vault(asset) to find the matching investment vault. If the investmentShareToken contract's vault() function returns a non-zero address for an asset that shouldn't have an investment vault, could this cause unwanted investment configuration where vaults invest into incorrect or unauthorized investment vaults?",
    "The _configureVaultInvestmentSettings() function approves type(uint256).max (line 549) to the vault on the investment ShareToken. If the same vault is registered, unregistered, then re-registered with a different configuration, could the unlimited approval persist across registration cycles, allowing the vault to access investment funds even after unregistration?",
    "In getCirculatingSupplyAndAssets() (lines 369-390), the function calls _calculateInvestmentAssets() (line 384) which returns totalInvestmentAssets including both balanceOf() and rBalanceOf() of the investment ShareToken. If the investment ShareToken's balanceOf() or rBalanceOf() functions have reentrancy vulnerabilities, could an attacker manipulate these values mid-call to inflate totalNormalizedAssets, affecting conversion ratios and allowing value extraction?",
    "The _calculateInvestmentAssets() function (lines 603-620) uses a try-catch block for rBalanceOf() (lines 615-619). If the investment ShareToken intentionally implements rBalanceOf() to revert under certain conditions (e.g., when circuit breakers are active), could this cause silent underreporting of invested assets, leading to incorrect conversion ratios that disadvantage late withdrawers?",
    "In setInvestmentManager() (lines 659-676), the function propagates the investment manager to all registered vaults (lines 667-673). If one vault's setInvestmentManager() call reverts due to access control or validation errors, could this cause partial propagation where some vaults have the new manager while others still have the old one, leading to investment coordination failures?",
    "The setInvestmentManager() function doesn't validate that newInvestmentManager is a contract address or has any specific interface. If the owner accidentally sets an EOA or a contract without investment management capabilities as the investment manager, could this break all investment operations across all vaults until the owner realizes the mistake and sets a correct manager?",
    "In registerVault() (lines 227-232), if the investment manager is already configured, it's automatically set for new vaults. However, the function calls ERC7575VaultUpgradeable(vaultAddress).setInvestmentManager() without checking if the vault is properly initialized. Could this revert if the vault's initialization is not complete, causing vault registration to fail unexpectedly?",
    "The getInvestedAssets() function (lines 626-628) returns the total of balanceOf + rBalanceOf for this ShareToken's holdings in the investment ShareToken. If the investment layer has multiple ShareTokens with cross-investments (circular dependencies), could this create infinite recursion or double-counting when calculating total assets, inflating the apparent value of the system?",
    "In convertNormalizedAssetsToShares() (lines 701-711), the function adds VIRTUAL_SHARES (1e6) and VIRTUAL_ASSETS (1e6) to prevent inflation attacks. However, if circulatingSupply is calculated as zero (line 703) due to all shares being held by vaults for redemptions, the final calculation becomes Math.mulDiv(normalizedAssets, 1e6, 1e6, rounding), which equals normalizedAssets. Could an attacker exploit this edge case by depositing when circulatingSupply is zero to receive 1:1 shares regardless of actual asset value, bypassing the intended conversion logic?",
    "The convertNormalizedAssetsToShares() function calls this.getCirculatingSupplyAndAssets() via external call (line 703). If there's a reentrancy vulnerability in any of the vaults iterated in getCirculatingSupplyAndAssets(), could an attacker reenter and manipulate the totalNormalizedAssets value mid-calculation, affecting the conversion ratio to their advantage?",
    "In convertSharesToNormalizedAssets() (lines 727-737), if totalNormalizedAssets is manipulated to be much larger than circulatingSupply, the conversion would give users more assets per share than fair value. Could an attacker donate large amounts of assets to investment vaults (which get counted in totalNormalizedAssets via _calculateInvestmentAssets()) to inflate the conversion ratio, then immediately redeem their shares for more assets than they deposited?",
    "The VIRTUAL_SHARES and VIRTUAL_ASSETS constants are set to 1e6 (lines 77-78). If the actual circulatingSupply grows to 1e24 or larger, the virtual amounts become negligible (1e6 / 1e24 = 1e-18). At this scale, could the virtual amount protection against inflation attacks become ineffective, allowing an attacker to manipulate the first deposit after total supply reaches zero through mass redemptions?",
    "In getCirculatingSupplyAndAssets() (line 389), the function calculates circulatingSupply as supply - totalClaimableShares, with a ternary to return 0 if totalClaimableShares > supply. If through accounting bugs, totalClaimableShares is exactly equal to supply, circulatingSupply becomes 0. Could this cause convertNormalizedAssetsToShares() to divide by (0 + VIRTUAL_SHARES), giving incorrect conversion ratios that allow users to mint shares for free or get stuck unable to mint?",
    "The conversion functions use Math.mulDiv() with a rounding parameter. If convertNormalizedAssetsToShares() uses Math.Rounding.Floor for deposits (favoring the protocol) but convertSharesToNormalizedAssets() uses Math.Rounding.Ceil for withdrawals (favoring users), could repeated deposit-withdraw cycles allow users to extract value through rounding in their favor, slowly draining the protocol?",
    "In getCirculatingSupplyAndAssets() (lines 374-381), the function iterates through all vaults calling IERC7575Vault(vaultAddress).getClaimableSharesAndNormalizedAssets(). If one vault returns extremely large values (e.g., type(uint256).max - 1) due to a bug, could the addition totalClaimableShares += vaultClaimableShares (line 379) or totalNormalizedAssets += vaultNormalizedAssets (line 380) overflow, causing the entire conversion system to break?",
    "The mint() function (lines 400-402) has the onlyVaults modifier which checks $.vaultToAsset[msg.sender] != address(0) (lines 127-131). If a vault is registered, mints shares, then gets unregistered (which deletes $.vaultToAsset[vaultAddress] on line 324), could users who received those shares before unregistration continue to hold tokens that no longer have a backing vault, creating orphaned shares that can't be redeemed?",
    "In burn() (lines 412-414), the function is onlyVaults and directly calls _burn(account, amount). If a malicious vault calls burn(userA, userA.balance) when userA has pending claimable redemptions, could this burn shares that should be held by the vault for redemption claims, causing the user's claimable redemptions to become unredeemable since the shares no longer exist?",
    "The spendAllowance() function (lines 422-424) is onlyVaults and calls _spendAllowance(owner, spender, amount). If a vault calls this with spender as an arbitrary address, could the vault manipulate allowances between any two users without their consent, potentially setting up unauthorized transfers that violate the dual allowance model?",
    "In vaultTransferFrom() (lines 749-760), the function performs a direct _transfer(from, to, amount) without checking allowance since it's onlyVaults. If a malicious vault calls vaultTransferFrom(userA, attackerAddress, amount), could it steal shares from userA without any authorization, violating the security model that assumes vaults only transfer shares as part of legitimate deposit/redeem operations?",
    "The onlyVaults modifier (lines 127-131) only checks if msg.sender is a registered vault, but doesn't validate which vault is authorized to mint/burn shares for which asset. If vault A (for USDC) calls mint() to issue shares for a USDT deposit, could this create incorrect share issuance where shares don't match the asset backing, breaking the multi-asset architecture?",
    "In mint() and burn(), there's no check that the account parameter is KYC-verified. While ERC20's _mint and _burn don't transfer (so no KYC check is expected in WERC7575ShareToken), if a vault mints shares to a non-KYC address, could those shares become permanently frozen since they can't be transferred due to KYC requirements, effectively reducing total supply and affecting conversion ratios?",
    "The vaultTransferFrom() function allows vaults to transfer shares from any 'from' address to any 'to' address without allowance checks. If a vault has a bug in its requestRedeem() logic that doesn't validate msg.sender is the owner or an approved operator, could the vault inadvertently enable anyone to call requestRedeem(victim) which then calls vaultTransferFrom(victim, vault, amount), stealing the victim's shares?",
    "The upgradeTo() function (lines 778-780) calls ERC1967Utils.upgradeToAndCall(newImplementation, '') and is protected by onlyOwner. However, if the owner's private key is compromised, the attacker could upgrade to a malicious implementation that changes the _getShareTokenStorage() function to return a different storage slot, effectively resetting all assetToVault mappings, operators, and investment configurations, causing complete loss of protocol state?",
    "In upgradeToAndCall() (lines 787-789), the function accepts arbitrary 'data' calldata that gets executed on the new implementation via delegatecall. If the owner accidentally passes malicious calldata or the new implementation has a selfdestruct in its initialization function, could this brick the proxy by destroying the implementation, making all ShareToken funds permanently inaccessible?",
    "The ShareTokenStorage struct (lines 83-93) doesn't have a gap array (__gap) for future storage expansion. If an upgrade adds new state variables to ShareTokenUpgradeable, these would be stored after the ERC-7201 namespaced storage. Could this cause storage collision if inherited contracts (ERC20Upgradeable, Ownable2StepUpgradeable) later add new variables in their storage layout, corrupting the ShareToken-specific data?",
    "The SHARE_TOKEN_STORAGE_SLOT is calculated as keccak256('erc7575.sharetoken.storage') (line 75). If a future version of the protocol introduces a different contract that also uses this exact namespace string for a different storage struct with different field layouts, could an upgrade to that implementation cause catastrophic storage corruption where assetToVault reads from what should be operators mapping?",
    "The upgradeTo() and upgradeToAndCall() functions don't have any time-delay or multi-sig requirements. If the owner's hot wallet is compromised in the middle of active vault operations (deposits pending, investments active), could the attacker immediately upgrade to a malicious implementation that steals all investment ShareToken balance (approved as type(uint256).max in line 549) before anyone can react?",
    "After an upgrade, if the new implementation changes the EnumerableMap.AddressToAddressMap structure or adds new mandatory initialization steps in _getShareTokenStorage(), but existing proxies are already initialized, could the storage slot return corrupted data? For example, if the new implementation expects additional fields in ShareTokenStorage but the storage was initialized with the old struct layout?",
    "In getRegisteredAssets() (lines 354-357), the function returns $.assetToVault.keys() which creates a new memory array and copies all keys. If MAX_VAULTS_PER_SHARE_TOKEN is set to 10 but an attacker registers exactly 10 vaults with long address arrays, could the gas cost of this view function exceed block gas limits on certain L2s, causing off-chain indexers and frontends to fail when querying registered assets?",
    "The getCirculatingSupplyAndAssets() function (lines 369-390) iterates through $.assetToVault using at(i) in a for loop (lines 374-381). If during the iteration, a vault's getClaimableSharesAndNormalizedAssets() call consumes excessive gas or reverts, could this make the entire conversion system unusable, bricking deposits and redemptions across all vaults since conversion functions depend on this view?",
    "In setInvestmentShareToken() (lines 580-584), the function iterates through all vaults and configures investment settings. If the EnumerableMap is modified during iteration (e.g., if _configureVaultInvestmentSettings() somehow triggers a vault registration via reentrancy), could this cause skipped iterations or repeated processing of the same vault, leading to incorrect investment configuration?",
    "The assetToVault.length() check (line 210) in registerVault() uses EnumerableMap.length() which is an O(1) operation. However, if the EnumerableMap library has a bug where length() is not decremented correctly when remove() is called in unregisterVault() (line 323), could the counter become permanently inaccurate, eventually blocking new vault registrations even though the actual number of vaults is below MAX_VAULTS_PER_SHARE_TOKEN?",
    "In unregisterVault() (line 323), the function calls $.assetToVault.remove(asset) which removes the entry from the EnumerableMap. If the remove operation doesn't properly clean up internal array indices in the EnumerableMap implementation, could this leave dangling references that cause at(i) in subsequent iterations to return stale vault addresses, leading to accounting errors in getCirculatingSupplyAndAssets()?",
    "The vault() function (lines 143-146) uses tryGet() and returns (bool, address). However, the function signature is declared as 'returns (address vaultAddress)' which only returns the address, not the boolean. If a caller assumes the returned address(0) means 'not found' but the function actually discards the boolean return value, could callers incorrectly treat address(0) as a valid vault address, leading to failed transactions or incorrect asset routing?",
    "In getCirculatingSupplyAndAssets() (line 387), totalSupply() is called which includes all shares, including those held by vaults. If a vault mints shares to itself (which is technically possible via the mint() function), could this inflate totalSupply without corresponding assets, causing circulatingSupply calculation to be incorrect and distorting conversion ratios?",
    "The getInvestmentShareToken() view function (lines 594-597) returns $.investmentShareToken which could be address(0) if not yet configured. If callers don't check for zero address and attempt to call functions on it, could this cause unexpected reverts in off-chain systems or frontends that assume an investment ShareToken is always configured?",
    "In isVault() (lines 337-340), the function checks if $.vaultToAsset[vaultAddress] != address(0). However, if address(0) is somehow a valid asset address on certain chains or L2s, could this function incorrectly return false for a legitimately registered vault with asset = address(0), breaking vault authorization checks?",
    "In registerVault() (line 200), the function calls IERC7575(vaultAddress).asset() where vaultAddress is user-provided. If the vault contract has a malicious asset() function that performs reentrancy back into registerVault() or other ShareToken functions, could this violate the CEI pattern by modifying assetToVault mapping before all validation checks are complete, potentially causing inconsistent state?",
    "In _configureVaultInvestmentSettings() (line 542), the function calls IERC7575ShareExtended(investmentShareToken).vault(asset) which is an external call to a user-configurable investment ShareToken. If that call has a reentrancy hook, could an attacker manipulate the returned investment vault address mid-execution to point to a malicious vault, causing ERC7575VaultUpgradeable(vaultAddress).setInvestmentVault() to configure incorrect investment targets?",
    "The setInvestmentManager() function (lines 659-676) iterates through all vaults and calls vault.setInvestmentManager(). If one of the vaults has a malicious setInvestmentManager() that reenters into setInvestmentManager() again with a different parameter, could this create a recursive loop or inconsistent manager settings across vaults where some have the new manager and others are reverted to old values?",
    "In _calculateInvestmentAssets() (lines 603-620), the function calls IERC20(investmentShareToken).balanceOf(address(this)) and IWERC7575ShareToken(investmentShareToken).rBalanceOf(address(this)). If the investment ShareToken has transfer hooks in its balanceOf() getter (unconventional but possible with malicious tokens), could this trigger reentrancy that manipulates totalNormalizedAssets during conversion calculations?",
    "The getCirculatingSupplyAndAssets() function is a view function but makes multiple external calls to vault contracts (line 378). If any vault's getClaimableSharesAndNormalizedAssets() function is not properly marked as view/pure and actually modifies state or calls back into ShareToken, could this violate the view function guarantee and cause unexpected state changes during what should be read-only operations?",
    "In registerVault(), if MAX_VAULTS_PER_SHARE_TOKEN is 10 and exactly 10 vaults are registered, the length check (line 210) would block new registrations. If one vault needs to be replaced, the owner must unregister first (requiring perfect vault state: no pending, no assets, no active users). Could a protocol upgrade requiring new vaults be blocked if old vaults are 'stuck' in active state, effectively bricking the ability to add new asset types?",
    "The convertNormalizedAssetsToShares() function adds VIRTUAL_ASSETS (1e6) to the denominator. If totalNormalizedAssets from all vaults is extremely small (e.g., 1 wei) due to mass withdrawals, the calculation becomes Math.mulDiv(normalizedAssets, circulatingSupply + 1e6, 1 + 1e6, rounding), heavily skewed by virtual amounts. Could this cause massive conversion errors where users receive 1e6x fewer shares than expected for small deposits?",
    "In unregisterVault(), the function checks metrics.isActive == false (line 294). If a vault owner can toggle isActive on and off at will, could they block unregistration indefinitely by setting isActive = true whenever the ShareToken owner attempts to unregister, creating a griefing attack that prevents protocol maintenance?",
    "The setOperator() function allows operator == address(0) as long as it's not equal to msg.sender. If a user accidentally calls setOperator(address(0), true), could this grant universal operator permissions to the zero address, and if any vault or system component defaults to address(0) for missing operator addresses, could this enable unauthorized operations?",
    "In _configureVaultInvestmentSettings() (line 545), if investmentVaultAddress is returned as address(0) (no matching investment vault for this asset), the function silently returns without configuring investment. If the protocol later adds an investment vault for that asset, could the original vault miss the configuration, requiring manual intervention to enable investment for that vault while others are automatically invested?",
    "The initialize() function can only be called once due to the 'initializer' modifier. If the initial owner parameter is set to an address that immediately loses access (e.g., a hardware wallet that's lost), could the entire ShareToken system become permanently ownerless, unable to register vaults, set investment configurations, or perform upgrades, effectively bricking the protocol?",
    "In getCirculatingSupplyAndAssets(), if all vaults have zero claimable shares and zero normalized assets, but totalSupply() > 0 due to previously minted shares that are now in user wallets, the conversion ratio would be based entirely on VIRTUAL_SHARES and VIRTUAL_ASSETS. Could this create a scenario where existing shareholders have shares with zero backing value, unable to redeem for any assets?",
    "The vaultTransferFrom() function (lines 749-760) doesn't emit a Transfer event since it's calling internal _transfer(). If external systems (block explorers, indexers) rely on Transfer events to track share movements, could vault-initiated transfers via vaultTransferFrom() be invisible to these systems, causing discrepancies between on-chain balances and off-chain indexed data?",
    "In registerVault(), if the vault's share() function (line 203) returns a different address than address(this) but passes the check due to a bug, the vault could be registered but shares would be minted to a different ShareToken. Could this cause users who deposit into this vault to receive shares in a different token than expected, leading to fund loss when they try to redeem?",
    "The supportsInterface() function (lines 798-800) checks for IERC7575ShareExtended, IERC7540Operator, and IERC165 interfaces. If a caller relies on interface detection to determine if the contract supports a specific function and the interface definition changes in a future EIP update, could callers incorrectly assume functionality exists or doesn't exist, leading to failed integrations or security assumptions?",
    "In _calculateInvestmentAssets() (lines 612-616), the function uses a try-catch for rBalanceOf() and silently continues if it reverts. If the investment ShareToken's rBalanceOf() always reverts due to a bug, the calculation would systematically undercount invested assets. Could this cause conversion ratios to be understated, allowing late depositors to get more shares per asset than fair value, extracting value from existing shareholders?",
    "The setInvestmentShareToken() function (line 577) sets $.investmentShareToken but doesn't verify that the investment ShareToken is actually a contract or implements required interfaces. If the owner accidentally sets a regular ERC20 token or an EOA address, subsequent calls to balanceOf() might succeed but rBalanceOf() would always fail, causing permanent undercounting of investment assets in conversion calculations?",
    "In registerVault(), when investment manager is already configured (lines 229-232), the function calls vault.setInvestmentManager(). If this call reverts because the vault hasn't fully initialized or has conflicting access control, could the entire registerVault() transaction fail, making it impossible to register new vaults once an investment manager is set, requiring the owner to remove and re-add the manager?",
    "The investment configuration automatically grants type(uint256).max approval (line 549) to each vault. If a vault is later found to have a vulnerability that allows arbitrary token transfers, could an attacker drain the entire investment ShareToken balance from the settlement ShareToken, affecting all users across all vaults since investments are centralized at the ShareToken level?",
    "In getCirculatingSupplyAndAssets() (line 384), invested assets are added to totalNormalizedAssets. If the investment layer has a different decimal precision or uses a different price calculation for the same underlying asset, could this create an inconsistent valuation where invested assets are counted at a different rate than vault assets, skewing conversion ratios in favor of early or late depositors?",
    "In setInvestmentManager() (lines 667-673), the function iterates through all vaults and calls setInvestmentManager() on each. If the iteration is interrupted mid-way due to gas limits or a reverting vault, would the entire transaction revert, leaving some vaults with the old manager and others with the new manager, creating fragmented investment control across the multi-asset system?",
    "The getCirculatingSupplyAndAssets() function calculates totalClaimableShares by summing across all vaults (lines 374-381). If a malicious vault inflates its claimableShares to type(uint256).max, the addition on line 379 could overflow despite Solidity 0.8's overflow checks, or if the sum exceeds totalSupply, line 389 would cap circulatingSupply at 0, breaking conversion ratios for all vaults due to one malicious vault?",
    "When a vault is unregistered (lines 282-327), its claimable shares are removed from future getCirculatingSupplyAndAssets() calculations. If users have unclaimed deposits or redemptions in that vault, could the circulating supply calculation become incorrect since those shares still exist in totalSupply() but are no longer counted in totalClaimableShares, causing inflated conversion ratios that disadvantage remaining users?",
    "The multi-asset architecture allows different assets with different decimals (6 for USDC, 18 for DAI) to share one 18-decimal ShareToken. If vault A (USDC) has $1M in 6-decimal assets normalized to 1e18, and vault B (DAI) has $1M in 18-decimal assets also at 1e18, the getCirculatingSupplyAndAssets() treats them equally. Could exchange rate fluctuations between USDC and DAI cause the normalized values to diverge, creating arbitrage where users deposit into one asset and redeem from another to extract value?",
    "In registerVault(), if the same asset address is used across different chains (USDC on mainnet vs USDC on L2), and if the ShareToken is deployed on multiple chains with the same proxy address, could a replay attack during vault registration cause the wrong vault to be registered for an asset, routing user deposits to unintended vaults or chains?",
    "The onlyOwner modifier is inherited from Ownable2StepUpgradeable. If during the two-step ownership transfer, the pending new owner calls acceptOwnership() and immediately transfers ownership again to a third address before the first transfer is complete, could this create a race condition where the wrong address becomes owner, gaining control over all vault registration and investment configuration?",
    "The onlyVaults modifier (lines 127-131) checks $.vaultToAsset[msg.sender] != address(0). If through a storage collision bug in an upgrade, vaultToAsset mapping is corrupted and returns non-zero for arbitrary addresses, could non-vault addresses bypass the modifier and call mint(), burn(), spendAllowance(), or vaultTransferFrom() to manipulate shares arbitrarily?",
    "In setOperatorFor() (line 525), the function is onlyVaults but doesn't restrict which controller can have operators set. If vault A calls setOperatorFor(userB, attackerC, true) where userB never interacted with vault A, could vault A grant unauthorized operator permissions to attackerC over userB's shares across all vaults, violating user consent?",
    "The owner can call registerVault() and unregisterVault() at any time without timelock. If the owner's private key is compromised, could an attacker immediately unregister all vaults (if they're in the correct state), effectively DoSing the entire protocol by removing all deposit/redeem entry points, and then register malicious vaults to steal subsequent deposits?",
    "The initialize() function calls __Ownable_init(owner) which sets the owner in Ownable2Step's storage. If the owner parameter is address(0) or an inaccessible address, could the ShareToken be deployed but immediately become unmanageable, unable to register vaults or set investment configurations, requiring a complete redeployment?",
    "In the constructor (lines 106-108), _disableInitializers() prevents initialization of the implementation. However, if someone deploys a proxy with an incorrect implementation address (pointing to a non-implementation contract), could initialize() be called on the wrong contract, setting up a seemingly functional but actually broken ShareToken where storage is in a different contract?",
    "The initialize() function checks decimals() == 18 (line 121) which calls ERC20Upgradeable's decimals() returning a hardcoded value. If a future version of OpenZeppelin changes the decimals() function to be mutable or changes the default from 18, could previously deployed proxies fail to initialize or new deployments pass the check with wrong decimals, breaking decimal normalization?",
    "The conversion functions depend on getCirculatingSupplyAndAssets() which depends on all vaults' getClaimableSharesAndNormalizedAssets(). If vault A is in the middle of fulfillDeposit (incrementing claimableShares) and vault B simultaneously fulfills a large redeem (decrementing claimableAssets), could the mid-state reads in getCirculatingSupplyAndAssets() capture inconsistent values, causing temporary conversion ratio spikes that allow",
    "In ERC7575VaultUpgradeable.fulfillDeposit() (lines 425-445), the function mints shares to the vault and stores them in claimableDepositShares[controller]. If a user calls deposit() or mint() multiple times with the same controller before all claimable shares are consumed, can they claim more shares than were actually fulfilled due to improper state tracking between claimableDepositShares and claimableDepositAssets?",
    "In ERC7575VaultUpgradeable.deposit() (lines 557-589), assets are converted to shares using the stored ratio (shares.mulDiv(availableShares, availableAssets)). If the investment manager calls fulfillDeposit() twice for the same controller without the user claiming in between, does the second fulfillment overwrite or add to claimableDepositAssets, potentially allowing double-claiming of the first fulfillment's shares?",
    "In ERC7575VaultUpgradeable.fulfillRedeem() (lines 822-841), shares are NOT burned during fulfillment—they are held by the vault until redeem()/withdraw() is called. If a malicious controller calls cancelRedeemRequest() after fulfillRedeem() but before claiming, can they move already-fulfilled shares back to pending state and claim them twice (once as cancelation, once as redemption)?",
    "In ERC7575VaultUpgradeable.redeem() (lines 885-918), the function burns shares from the vault's balance after calculating proportional assets. If the vault's share balance is insufficient due to a prior burn or transfer, can this cause an underflow that either reverts legitimate claims or allows claiming more assets than entitled?",
    "In ERC7575VaultUpgradeable.claimCancelDepositRequest() (lines 1691-1711), assets are transferred back to the receiver after deleting claimableCancelDepositAssets[controller]. If the asset transfer fails silently (non-reverting ERC20), does the state get permanently deleted while the user receives no assets, causing permanent fund loss?",
    "In ERC7575VaultUpgradeable.totalAssets() (lines 1174-1180), reserved assets are calculated as totalPendingDepositAssets + totalClaimableRedeemAssets + totalCancelDepositAssets. However, totalClaimableRedeemAssets is in asset units while totalClaimableRedeemShares tracks shares. If convertToAssets() rates change between fulfillment and claim, can this mismatch cause totalAssets() to undercount or overcount reserved amounts, enabling over-investment?",
    "In ERC7575VaultUpgradeable.investAssets() (lines 1448-1465), the function checks that amount <= totalAssets() before transferring to the investment vault. Since totalAssets() excludes reserved assets (pending deposits, claimable redemptions, cancelations), can a race condition occur where assets meant for pending claims are invested, causing redeem() or claimCancelDepositRequest() to fail due to insufficient balance?",
    "In ERC7575VaultUpgradeable.fulfillDeposit() (lines 425-445), shares are calculated using _convertToShares(assets, Math.Rounding.Floor). If the conversion rate (circulating supply / total assets) changes dramatically between requestDeposit() and fulfillDeposit() due to investment losses, can users receive significantly fewer shares than expected, violating the async deposit invariant?",
    "In ERC7575VaultUpgradeable._convertToAssets() (lines 1204-1216), the function denormalizes assets by dividing by scalingFactor. If scalingFactor is calculated incorrectly during initialize() (line 186) for edge-case decimals, can this cause systematic over/under-conversion that accumulates across all vault operations?",
    "In ERC7575VaultUpgradeable.requestDeposit() (lines 341-371), assets are immediately transferred to the vault and added to totalPendingDepositAssets. If the investment manager never calls fulfillDeposit() for this controller, do these assets remain in pending state forever, effectively locked and preventing their investment, while totalAssets() correctly excludes them but they're still unusable?",
    "In ERC7575VaultUpgradeable.withdrawFromInvestment() (lines 1477-1509), the function uses previewWithdraw() to estimate shares needed, then redeems minShares (capped at maxShares). If the investment vault's conversion rate has adverse slippage, can the actual assets withdrawn be significantly less than requested, breaking the reserved asset accounting and causing failed user redemptions?",
    "In ERC7575VaultUpgradeable.withdrawFromInvestment() (lines 1477-1509), the function checks that ShareToken has self-allowance (investmentShareToken.allowance(shareToken_, shareToken_) >= minShares). If this allowance is insufficient, the function reverts with InvestmentSelfAllowanceMissing. Can an attacker front-run a legitimate withdrawal by spending the ShareToken's self-allowance on the investment share token, causing the vault to be unable to withdraw from investments and blocking all user redemptions?",
    "In ERC7575VaultUpgradeable.investAssets() (lines 1448-1465), shares from the investment vault are sent directly to the ShareToken ($.shareToken as receiver). If the ShareToken does not properly track these investment shares separately from user shares, can this corrupt the circulating supply calculation and enable share inflation attacks?",
    "In ERC7575VaultUpgradeable.withdrawFromInvestment() (lines 1477-1509), the actualAmount is calculated as balanceAfter - balanceBefore. If the investment vault or underlying asset has a transfer fee that wasn't present during investAssets(), can this cause actualAmount < requested amount, leading to insufficient assets for pending redemptions and permanent user fund lockup?",
    "In ERC7575VaultUpgradeable.setInvestmentVault() (lines 1397-1408), the function validates that investmentVault_.asset() == $.asset. However, it does not verify that the investment vault's share token is compatible or that the ShareToken is authorized. Can setting an incompatible investment vault brick the entire investment system, preventing future investAssets() or withdrawFromInvestment() calls from succeeding?",
    "In ERC7575VaultUpgradeable.fulfillDeposits() batch function (lines 453-484), the loop accumulates shareAmounts and mints them in a single ShareToken.mint(address(this), shareAmounts) call. If one controller in the batch has pendingAssets < assetAmount, the entire transaction reverts. Can a malicious investment manager grief the system by including invalid controllers in batches, forcing fulfillments to be processed one-by-one at much higher gas cost?",
    "In ERC7575VaultUpgradeable.fulfillDeposit() (lines 425-445), claimableDepositAssets[controller] += assets is used to store the exact asset amount. However, if fulfillDeposit() is called multiple times for the same controller with partial amounts, does the += operation correctly accumulate, or can precision loss in the shares calculation cause the stored asset amount to diverge from the actual shares, enabling partial claim exploits?",
    "In ERC7575VaultUpgradeable.fulfillRedeem() (lines 822-841), the function updates both totalClaimableRedeemAssets and totalClaimableRedeemShares. If these two totals get out of sync due to a bug in one of the fulfill/claim functions, can this cause totalAssets() to miscalculate reserved assets, enabling over-investment that leaves insufficient funds for redemptions?",
    "In ERC7575VaultUpgradeable.fulfillCancelDepositRequest() (lines 994-1006), the function moves assets from pendingCancelDepositAssets to claimableCancelDepositAssets without verifying that the assets are actually available in the vault balance. If assets were invested after the cancelation was requested, can this create a claimable cancelation that cannot be fulfilled, causing claimCancelDepositRequest() to always revert?",
    "In ERC7575VaultUpgradeable.fulfillDeposit() (lines 425-445), if the investment manager passes assets=0, the function would calculate shares=0 via _convertToShares() and then revert with ZeroShares. However, does this leave pendingDepositAssets[controller] unchanged, allowing the investment manager to repeatedly attempt zero fulfillments without consequence, while the user's assets remain locked in pending state?",
    "In ERC7575VaultUpgradeable.cancelDepositRequest() (lines 1574-1595), the function moves assets from pendingDepositAssets to pendingCancelDepositAssets and adds the controller to controllersWithPendingDepositCancelations, which blocks new deposit requests. If the investment manager never calls fulfillCancelDepositRequest(), can the controller be permanently blocked from making new deposits while their original assets are stuck in pending cancelation state?",
    "In ERC7575VaultUpgradeable.cancelRedeemRequest() (lines 1745-1764), shares are moved from pendingRedeemShares to pendingCancelRedeemShares. However, unlike deposit cancelations, there is no tracking of totalCancelRedeemShares that affects totalAssets(). If these shares are still held by the vault but not burned, can they be double-counted in circulating supply calculations, enabling share inflation?",
    "In ERC7575VaultUpgradeable.claimCancelRedeemRequest() (lines 1866-1885), shares are transferred back to the owner using SafeTokenTransfers.safeTransfer($.shareToken, owner, shares). If the ShareToken transfer reverts due to KYC restrictions or other share token constraints, does this brick the entire cancelation claim process, permanently locking the user's shares in the vault?",
    "In ERC7575VaultUpgradeable.cancelDepositRequest() (lines 1574-1595), the totalCancelDepositAssets is incremented, which affects totalAssets() calculation. If a user cancels a large deposit, does this create a large reserved amount that prevents the investment manager from investing other available assets, creating a griefing vector where malicious users can repeatedly request and cancel deposits to block investments?",
    "In ERC7575VaultUpgradeable.fulfillCancelDepositRequests() batch function (lines 1034-1051), if pendingAssets > 0 for a controller, it moves them to claimable without checking if the vault actually has sufficient balance. If multiple controllers cancel simultaneously and assets were already invested, can this create claimable cancelations that exceed vault balance, causing claimCancelDepositRequest() calls to fail for later claimants?",
    "In ERC7575VaultUpgradeable.requestDeposit() (lines 341-371), the function checks if owner == msg.sender OR isOperator(owner, msg.sender). If the operator approval is revoked on the ShareToken after this check but before the asset transfer, can the transfer still succeed, granting an unauthorized party control over the deposit request and its eventual shares?",
    "In ERC7575VaultUpgradeable.requestRedeem() (lines 715-751), both operator approval AND ERC20 allowance can authorize redemptions. If an operator is approved but has no ERC20 allowance, they can bypass the spendAllowance() call. Can this enable an operator to redeem shares without proper allowance tracking, breaking accounting assumptions in the ShareToken's allowance system?",
    "In ERC7575VaultUpgradeable.setOperator() (lines 264-271), the function delegates to ShareToken.setOperatorFor(msg.sender, operator, approved). If the ShareToken's setOperatorFor() has a bug that allows unauthorized operator changes, can this be exploited through the vault's setOperator() interface to gain operator permissions without proper authorization?",
    "In ERC7575VaultUpgradeable.deposit() (lines 557-589), the controller authorization check uses isOperator(controller, msg.sender). If the ShareToken's isOperator() function has stale state or caching issues, can a revoked operator still claim shares by calling deposit() before the operator revocation is reflected in the vault's view of the operator state?",
    "In ERC7575VaultUpgradeable.claimCancelDepositRequest() (lines 1691-1711), operator authorization is checked using IERC7540($.shareToken).isOperator(controller, msg.sender). If the operator was approved after the cancelation was initiated but before claim, can they claim the canceled assets to a different receiver, stealing funds from the original controller?",
    "In ERC7575VaultUpgradeable._convertToShares() (lines 1188-1196), assets are first normalized to 18 decimals by multiplying by scalingFactor, then converted using ShareToken.convertNormalizedAssetsToShares(). If scalingFactor is larger than uint64.max (checked only in initialize), can a malicious owner set a vault with extreme decimal mismatch that causes overflow in this multiplication, bricking all deposit/redeem conversions?",
    "In ERC7575VaultUpgradeable._convertToAssets() (lines 1204-1216), the denormalization divides normalizedAssets by scalingFactor. If scalingFactor == 0 (impossible per initialize() checks) or if the division rounds down to zero for small share amounts, can users request redeems that calculate to 0 assets, causing ZeroAssets reverts and trapping their shares?",
    "In ERC7575VaultUpgradeable.initialize() (lines 150-190), the scalingFactor is calculated as 10^(18 - assetDecimals) and cast to uint64. For assets with decimals < 18, this works correctly. But if assetDecimals == 18, scalingFactor == 1. Can this edge case cause precision loss in _convertToShares() where the normalization step becomes a no-op, leading to conversion inaccuracies?",
    "In ERC7575VaultUpgradeable.deposit() (lines 557-589), shares are calculated as assets.mulDiv(availableShares, availableAssets, Math.Rounding.Floor). If availableAssets is very small due to partial claims, can the rounding cause shares to round down to zero even when assets > 0, causing the ZeroSharesCalculated revert and preventing users from claiming their fulfilled deposits?",
    "In ERC7575VaultUpgradeable.withdraw() (lines 927-962), shares are calculated as assets.mulDiv(availableShares, availableAssets, Math.Rounding.Floor). If the user requests to withdraw all their claimableRedeemAssets but the Floor rounding causes calculated shares to be 1 wei less than availableShares, will there be permanent dust shares left in claimableRedeemShares that can never be claimed?",
    "In ERC7575VaultUpgradeable.requestDeposit() (lines 341-371), the SafeTokenTransfers.safeTransferFrom() call (line 361) occurs before state updates (lines 364-366). While this follows Pull-Then-Credit pattern, if the asset token has a transfer callback that calls back into requestDeposit() or other vault functions, can the reentrancy guard alone prevent exploitation, or can state inconsistency still occur?",
    "In ERC7575VaultUpgradeable.deposit() (lines 557-589), state is updated (lines 574-581) before the share transfer (lines 586-588). If the ShareToken.transfer() call reenters the vault via another function, can the attacker exploit the fact that claimableDepositShares[controller] has been decremented but shares haven't been transferred yet, potentially claiming the same shares twice via parallel flows?",
    "In ERC7575VaultUpgradeable.redeem() (lines 885-918), shares are burned (line 912) after state updates (lines 899-909) but before asset transfer (line 916). If SafeTokenTransfers.safeTransfer() reenters via a malicious asset token, can the attacker exploit the post-burn but pre-transfer state to manipulate reserved asset calculations or initiate another redeem?",
    "In ERC7575VaultUpgradeable.claimCancelDepositRequest() (lines 1691-1711), state deletion occurs (line 1702) before asset transfer (line 1707). If the SafeTokenTransfers.safeTransfer() call reenters the contract, can the attacker call claimCancelDepositRequest() again in the same transaction, exploiting the fact that claimableCancelDepositAssets[controller] is already deleted but the first transfer hasn't completed?",
    "In ERC7575VaultUpgradeable.withdrawFromInvestment() (lines 1477-1509), the external call to IERC7575($.investmentVault).redeem() occurs with a nonReentrant guard. However, if the investment vault is malicious and makes nested calls to other vault functions, can it exploit state changes that occurred before the redeem call but during the same transaction?",
    "In ERC7575VaultUpgradeable.upgradeTo() (lines 2176-2178), only the onlyOwner modifier protects the upgrade. If the owner's private key is compromised, can an attacker upgrade to a malicious implementation that steals all vault assets, pending deposits, and claimable redemptions? What storage slot collisions could occur if the new implementation uses different ERC-7201 namespaced slots?",
    "In ERC7575VaultUpgradeable._getVaultStorage() (lines 132-137), the storage slot is calculated as keccak256('erc7575.vault.storage'). If a malicious upgrade uses a different storage slot string or overwrites this slot, can it corrupt the VaultStorage struct fields (asset, shareToken, totalPendingDepositAssets, etc.), causing permanent fund loss or state confusion?",
    "In ERC7575VaultUpgradeable.initialize() (lines 150-190), the initializer modifier prevents re-initialization. However, if an upgraded implementation adds new storage variables without using proper namespaced storage, can these new variables collide with the existing VaultStorage struct, corrupting critical fields like investmentManager or totalClaimableRedeemAssets?",
    "In ERC7575VaultUpgradeable.upgradeToAndCall() (lines 2185-2187), the function accepts arbitrary calldata to execute on the new implementation. If the new implementation has a function that can manipulate storage without proper access control, can an attacker use upgradeToAndCall() to bypass normal authorization and directly modify totalPendingDepositAssets or other critical state?",
    "In ERC7575VaultUpgradeable, there are no gap arrays visible in the VaultStorage struct. If a future upgrade adds new fields to VaultStorage, can these new fields overwrite existing mappings or EnumerableSet data, corrupting the activeDepositRequesters or controllersWithPendingDepositCancelations sets and causing fund loss?",
    "In ERC7575VaultUpgradeable.requestDeposit() (lines 341-371), deposits below minimumDepositAmount (line 346) are rejected. However, minimumDepositAmount is stored as uint16 and multiplied by 10^assetDecimals. For assets with high decimals (e.g., 18), can the multiplication overflow the uint16, causing the minimum check to pass for amounts that should be rejected?",
    "In ERC7575VaultUpgradeable.setMinimumDepositAmount() (lines 1433-1436), the owner can set minimumDepositAmount to any uint16 value without validation. If set to 0, can users request deposits of 1 wei, creating thousands of tiny pending deposits that bloat the activeDepositRequesters set and cause DoS when iterating over them?",
    "In ERC7575VaultUpgradeable.requestDeposit() (lines 341-371), the ownerBalance check (lines 349-352) occurs before the asset transfer. If the owner's balance decreases between the check and the safeTransferFrom() call due to another transaction, can this cause the transfer to fail, leaving pendingDepositAssets[controller] incremented without assets being transferred?",
    "In ERC7575VaultUpgradeable.fulfillDeposit() (lines 425-445), if the investment manager calls fulfillDeposit() with assets that are only slightly less than pendingDepositAssets[controller], the remaining dust in pending state may be too small to fulfill later due to the ZeroShares revert. Can this trap user funds in pending state permanently?",
    "In ERC7575VaultUpgradeable.requestDeposit() (lines 341-371), the vault must be active ($.isActive check at line 343). If the owner deactivates the vault after many users have pending deposits but before fulfillDeposit() is called, are those pending deposits stuck forever, or can they only be recovered via ERC7887 cancelation?",
    "In ERC7575VaultUpgradeable.redeem() (lines 885-918), ShareToken.burn(address(this), shares) is called to burn shares held by the vault. If the ShareToken's burn() function has a bug that doesn't properly decrement totalSupply, can this cause a permanent divergence between actual circulating supply and the ShareToken's totalSupply(), breaking conversion ratios?",
    "In ERC7575VaultUpgradeable.fulfillRedeem() (lines 822-841), shares are added to totalClaimableRedeemShares (line 837) to track shares held by vault for burning. If totalClaimableRedeemShares overflows (extremely unlikely with uint256), can this cause totalAssets() to incorrectly calculate reserved assets, enabling over-investment?",
    "In ERC7575VaultUpgradeable.withdraw() (lines 927-962), shares are calculated but if shares == 0 due to rounding, the burn() call (line 956) may succeed with zero shares. Does this cause unnecessary state updates and gas waste, or can it enable an attacker to repeatedly call withdraw() with dust amounts to grief the system?",
    "In ERC7575VaultUpgradeable.redeem() (lines 885-918), if availableAssets == assets (full redemption), the function deletes both claimableRedeemAssets and claimableRedeemShares. However, if there's a rounding dust of 1 wei in availableShares that wasn't claimed, does this deletion permanently trap that 1 wei of shares in the vault, never to be burned?",
    "In ERC7575VaultUpgradeable.requestRedeem() (lines 715-751), shares are transferred to the vault using ShareToken.vaultTransferFrom(). If the ShareToken's balance tracking has a bug where this transfer doesn't properly increment the vault's balance, can fulfillRedeem() later attempt to calculate assets for shares the vault doesn't actually hold, breaking the redemption flow?",
    "In ERC7575VaultUpgradeable.getActiveDepositRequesters() (lines 1910-1916), if more than 100 active requesters exist, the function reverts with TooManyRequesters. Can a malicious attacker create 100+ tiny deposit requests (above minimum but small) to permanently DoS this view function, preventing off-chain systems from fetching the list and breaking investment manager tooling?",
    "In ERC7575VaultUpgradeable.fulfillDeposits() (lines 453-484), the activeDepositRequesters set is not modified during batch fulfillment—only when deposit() or mint() fully claims. If the investment manager partially fulfills deposits in batches, can the activeDepositRequesters set grow unbounded, eventually causing getActiveDepositRequesters() to always revert?",
    "In ERC7575VaultUpgradeable.cancelDepositRequest() (lines 1574-1595), the controller is removed from activeDepositRequesters (line 1592) but added to controllersWithPendingDepositCancelations (line 1591). If controllersWithPendingDepositCancelations has no size limit, can an attacker cancel and re-request deposits repeatedly to bloat this set, causing excessive gas costs for investment manager operations that iterate over it?",
    "In ERC7575VaultUpgradeable._paginateControllerStatus() (lines 2074-2105), the function uses addressSet.values(offset, offset + limit) which relies on EnumerableSet's built-in range function. If offset > addressSet.length(), does this revert or return an empty array? Can incorrect pagination parameters cause unexpected behavior in off-chain integrations?",
    "In ERC7575VaultUpgradeable.deposit() (lines 557-589), when availableAssets == assets (full claim), the controller is removed from activeDepositRequesters (line 575). However, if a user has multiple partial fulfillments and claims them in separate transactions, is the removal only done on the final claim, or can this cause premature removal while claimable amounts remain?",
    "In ERC7575VaultUpgradeable.setInvestmentManager() (lines 1379-1387), both the owner and the ShareToken can set the investment manager. If the ShareToken is compromised or has a bug, can it set a malicious investment manager who then calls fulfillDeposit() to mint shares to arbitrary addresses or fulfillRedeem() to drain the vault?",
    "In ERC7575VaultUpgradeable.investAssets() (lines 1448-1465), only the investment manager can invest. However, if the investment manager address is set to a contract that anyone can call into (like a proxy or multisig with broad permissions), can unauthorized users indirectly trigger investAssets() through that contract, potentially over-investing and causing failed redemptions?",
    "In ERC7575VaultUpgradeable.withdrawFromInvestment() (lines 1477-1509), the investment manager is trusted to pass accurate amount parameters. If they pass amount > actualAmount that can be withdrawn from the investment vault, can this cause a revert in the investment vault's redeem() call, permanently bricking withdrawals from investment?",
    "In ERC7575VaultUpgradeable.fulfillDeposit() (lines 425-445), the investment manager can fulfill any pending deposit for any controller at any conversion rate (determined by totalAssets at fulfillment time). Can the investment manager selectively fulfill deposits when conversion rates are unfavorable to users, or delay fulfillments to manipulate the asset-to-share ratio?",
    "In ERC7575VaultUpgradeable.fulfillRedeem() (lines 822-841), the investment manager can fulfill redeems partially. If they fulfill only 1 wei of pending shares repeatedly, can they bloat the claimableRedeemShares state for a controller, causing excessive gas costs when that controller eventually tries to redeem all their claimable shares?",
    "In ERC7575VaultUpgradeable.totalAssets() (lines 1174-1180), the calculation is balance - reservedAssets where reservedAssets = totalPendingDepositAssets + totalClaimableRedeemAssets + totalCancelDepositAssets. If an investment manager invests assets, then users request large redemptions that are fulfilled, can totalClaimableRedeemAssets grow larger than the vault's balance, causing totalAssets() to return 0 and breaking all conversion rate calculations?",
    "In ERC7575VaultUpgradeable.totalAssets() (lines 1174-1180), if balance < reservedAssets, the function returns 0. Can an attacker exploit this by requesting massive cancelations (which increase totalCancelDepositAssets) to force totalAssets() to 0, causing convertToShares() to fail and preventing any new fulfillments from succeeding?",
    "In ERC7575VaultUpgradeable.totalAssets() (lines 1174-1180), the function excludes invested assets intentionally. However, if an investment manager withdraws from investment to fulfill redemptions, are the withdrawn assets immediately available in balance, or is there a window where assets are in transit, causing totalAssets() to undercount and enabling double-investment?",
    "In ERC7575VaultUpgradeable.totalAssets() (lines 1174-1180), totalPendingDepositAssets represents assets that have been transferred to the vault but not yet converted to shares. If these assets are invested via investAssets() before fulfillDeposit() is called, can this create a scenario where totalAssets() correctly excludes them as reserved, but they're also no longer in the vault balance, causing permanent accounting mismatch?",
    "In ERC7575VaultUpgradeable.getClaimableSharesAndNormalizedAssets() (lines 1531-1538), vaultAssets is calculated via totalAssets() and then normalized. If totalAssets() returns 0 due to the reserved assets issue, can this cause ShareToken's getCirculatingSupplyAndAssets() to miscalculate the global conversion rate, enabling share inflation attacks across all vaults?",
    "In ERC7575VaultUpgradeable.deposit() (lines 557-589), shares are calculated using Math.Rounding.Floor which favors the vault. If a user's claimable assets are very small (e.g., 1 wei) and the share ratio is unfavorable, can the Floor rounding cause shares to round down to 0, triggering ZeroSharesCalculated revert and permanently locking those assets in claimable state?",
    "In ERC7575VaultUpgradeable.withdraw() (lines 927-962), shares are calculated with Floor rounding, but assets are the user's requested amount. If the user requests exactly their claimableRedeemAssets, can rounding cause calculated shares to be 1 wei less, leaving dust shares that can never be redeemed because subsequent withdraw() calls with small assets would round to 0 shares?",
    "In ERC7575VaultUpgradeable.fulfillDeposit() (lines 425-445), shares are calculated with Floor rounding. Over many small fulfillments, can the accumulated rounding error cause the sum of claimableDepositShares across all controllers to be significantly less than the shares that would have been calculated for the sum of all assets, causing a loss to users?",
    "In ERC7575VaultUpgradeable._convertToShares() (lines 1188-1196), the normalized assets are converted by ShareToken.convertNormalizedAssetsToShares() which uses the global circulating supply and assets. If the ShareToken's conversion has a different rounding mode than expected, can this cause a divergence in expected vs actual shares minted, breaking the stored claimableDepositAssets ratio?",
    "In ERC7575VaultUpgradeable.redeem() (lines 885-918), assets are calculated as shares.mulDiv(availableAssets, availableShares, Floor). If availableShares > availableAssets (possible after investment losses), the ratio < 1 and Floor rounding significantly benefits the vault. Can users end up receiving far fewer assets than their shares are worth, especially for small redemptions?",
    "In ERC7575VaultUpgradeable.fulfillDeposit() (lines 425-445), both claimableDepositShares and claimableDepositAssets are incremented. If a subsequent bug causes these two values to get out of sync for a controller (e.g., one is incremented twice), can this enable the user to claim more shares or assets than entitled, draining the vault?",
    "In ERC7575VaultUpgradeable.requestRedeem() (lines 715-751), pendingRedeemShares[controller] is incremented and shares are transferred to the vault. If the share transfer succeeds but the state update reverts (impossible with current code structure), or if reentrancy causes a state inconsistency, can shares be transferred without pending state being updated, causing lost shares?",
    "In ERC7575VaultUpgradeable.fulfillRedeem() (lines 822-841), both claimableRedeemAssets and claimableRedeemShares are incremented by different amounts (assets and shares). If the conversion rate changes between multiple fulfillRedeem() calls for the same controller, can the ratio of total claimableRedeemAssets to claimableRedeemShares diverge from the expected ratio, causing redeem/withdraw claims to fail?",
    "In ERC7575VaultUpgradeable.cancelDepositRequest() (lines 1574-1595), totalPendingDepositAssets is decremented and totalCancelDepositAssets is incremented by the same amount. If these updates are not atomic and a state change occurs in between (impossible without reentrancy), can this cause a temporary state where neither pending nor cancel totals account for the assets?",
    "In ERC7575VaultUpgradeable.deposit() (lines 557-589), if the share transfer at line 586 fails by returning false instead of reverting, does the state update at lines 574-581 remain in effect? Can this cause claimableDepositShares[controller] to be decremented without shares being transferred, enabling the vault to steal shares?",
    "In ERC7575VaultUpgradeable.getControllerStatusBatch() (lines 2002-2018), the function enforces a maximum batch size of 1000 (MAX_BATCH_SIZE). If an attacker creates 1001 pending deposits across different controllers, can they prevent the investment manager from efficiently querying all pending deposits in a single call, forcing them to use pagination which increases operational complexity?",
    "In ERC7575VaultUpgradeable.requestDeposit() (lines 341-371), there is no maximum deposit amount check. Can a whale deposit an amount so large that it overflows totalPendingDepositAssets (uint256 max), causing the deposit to succeed but totalAssets() to miscalculate reserved amounts, enabling over-investment?",
    "In ERC7575VaultUpgradeable.requestRedeem() (lines 715-751), there is no maximum redeem amount check. If a user requests to redeem type(uint256).max shares (assuming they have them), can this cause totalClaimableRedeemShares to overflow when fulfillRedeem() is called, bricking the entire redemption system?",
    "In ERC7575VaultUpgradeable.initialize() (lines 150-190), scalingFactor is cast to uint64. While checked to not exceed uint64.max, if assetDecimals is very low (e.g., 2), scalingFactor would be 10^16 which fits. However, in _convertToShares(), normalizedAssets = assets * scalingFactor. Can this multiplication overflow for large asset amounts, causing conversions to revert?",
    "In ERC7575VaultUpgradeable.fulfillDeposits() (lines 453-484), there's no limit on the number of controllers in the batch. Can the investment manager pass an array of 10,000 controllers, causing the function to run out of gas and revert, while still having successfully processed partial fulfillments in the loop before the revert?",
    "In ERC7575VaultUpgradeable.cancelDepositRequest() (lines 1574-1595), the function checks if requestId != REQUEST_ID (which is 0) and reverts with InvalidRequestId. However, since REQUEST_ID is hardcoded to 0, is this check even necessary? Can an attacker find a way to exploit the assumption that requestId is always 0 to bypass other validations?",
    "In ERC7575VaultUpgradeable.claimCancelDepositRequest() (lines 1691-1711), if a future upgrade introduces support for multiple concurrent requestIds per controller, can the current single-requestId architecture cause conflicts where old pending cancelations are overwritten by new ones, losing user funds?",
    "In ERC7575VaultUpgradeable.pendingDepositRequest() (lines 385-388), the requestId parameter is accepted but completely ignored—only the controller address is used. Can this violate the ERC7540 spec if integrations expect requestId to be meaningful, causing off-chain systems to malfunction?",
    "In ERC7575VaultUpgradeable, all functions use REQUEST_ID = 0 as a constant. If a malicious integrator calls pendingDepositRequest(999, controller) expecting it to return 0 for non-existent request 999, will it instead return the pending amount for request 0, causing accounting confusion in the integrator's system?",
    "In ERC7575VaultUpgradeable.initialize() (lines 150-190), the vault validates that the share token has 18 decimals. However, if the ShareToken is later upgraded to a version with different decimals, can this break all conversion calculations that assume 18 decimals, causing massive over/under-issuance of shares?",
    "In ERC7575VaultUpgradeable.fulfillDeposit() (lines 425-445), ShareToken.mint() is called to mint shares to the vault. If the ShareToken's mint() function has a bug that mints fewer shares than requested or mints to a different address, can this cause a permanent divergence between claimableDepositShares and actual vault share balance?",
    "In ERC7575VaultUpgradeable.requestRedeem() (lines 715-751), ShareToken.vaultTransferFrom() is used instead of standard transferFrom(). If vaultTransferFrom() has different authorization semantics or access controls, can this enable unauthorized redemption requests or bypass necessary checks?",
    "In ERC7575VaultUpgradeable.deposit() (lines 557-589), shares are transferred using IERC20Metadata($.shareToken).transfer(receiver, shares). If the ShareToken has additional restrictions (like KYC checks) that cause the transfer to fail, does this revert the entire deposit() claim, or can it cause shares to be deducted from claimable without being transferred?",
    "In ERC7575VaultUpgradeable.setOperator() (lines 264-271), the function calls ShareToken.setOperatorFor(msg.sender, operator, approved). If the ShareToken's operator system is compromised or has a bug allowing unauthorized operator approvals, can an attacker gain operator permissions for other users through this vault function?",
    "In ERC7575VaultUpgradeable.requestDeposit() (lines 341-371), SafeToken",
];
